//! Line-oriented front end driving a [`Session`]

use std::fmt::Write as _;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::backend::ImageEditBackend;
use crate::catalog::filter::Filter;
use crate::catalog::{Gender, HairColor, HairLength};
use crate::error::{AppError, Result};
use crate::i18n::{translations, Language};
use crate::payload::file::FileHandler;
use crate::studio::{Phase, Session};

pub const USAGE: &str = "\
commands:
  help                               show this text
  lang <zh|vi|th|en>                 change display language
  gender <female|male>               change demographic (clears selection)
  length <all|short|medium|long>     filter by hair length
  color <all|black|brown|blonde|red|silver|multicolor>
                                     filter by hair color
  clear-filters                      reset both filters
  styles                             list visible styles
  select <id>                        choose a style
  upload <path>                      load a photo
  generate                           apply the selected style to the photo
  save [dir]                         write the result to disk
  reset                              start over with a new photo
  dismiss                            close the error message
  status                             show the current session
  quit                               exit";

/// One user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Language(Language),
    Gender(Gender),
    Length(Filter<HairLength>),
    Color(Filter<HairColor>),
    ClearFilters,
    Styles,
    Select(String),
    Upload(PathBuf),
    Generate,
    Save(Option<PathBuf>),
    Reset,
    Dismiss,
    Status,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("{0} (type 'help' for commands)")]
pub struct ParseCommandError(String);

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let arg = |what: &str| {
            if rest.is_empty() {
                Err(ParseCommandError(format!("'{}' needs {}", word, what)))
            } else {
                Ok(rest)
            }
        };
        let invalid = |e: AppError| ParseCommandError(e.to_string());

        let command = match word.to_lowercase().as_str() {
            "help" | "?" => Command::Help,
            "lang" | "language" => Command::Language(arg("a language code")?.parse().map_err(invalid)?),
            "gender" => {
                let gender: Gender = arg("a gender")?.parse().map_err(invalid)?;
                if !Gender::SELECTABLE.contains(&gender) {
                    return Err(ParseCommandError("gender must be female or male".to_string()));
                }
                Command::Gender(gender)
            }
            "length" => Command::Length(arg("a length or 'all'")?.parse().map_err(invalid)?),
            "color" | "colour" => Command::Color(arg("a color or 'all'")?.parse().map_err(invalid)?),
            "clear-filters" | "clear" => Command::ClearFilters,
            "styles" | "ls" => Command::Styles,
            "select" => Command::Select(arg("a style id")?.to_string()),
            "upload" => Command::Upload(PathBuf::from(arg("a file path")?)),
            "generate" | "go" => Command::Generate,
            "save" | "download" => Command::Save((!rest.is_empty()).then(|| PathBuf::from(rest))),
            "reset" => Command::Reset,
            "dismiss" => Command::Dismiss,
            "status" => Command::Status,
            "quit" | "exit" => Command::Quit,
            "" => return Err(ParseCommandError("empty command".to_string())),
            other => return Err(ParseCommandError(format!("unknown command '{}'", other))),
        };
        Ok(command)
    }
}

/// Interactive console owning one session
pub struct Console<'c> {
    session: Session<'c>,
    backend: Arc<dyn ImageEditBackend>,
    files: FileHandler,
}

impl<'c> Console<'c> {
    pub fn new(session: Session<'c>, backend: Arc<dyn ImageEditBackend>, files: FileHandler) -> Self {
        Self {
            session,
            backend,
            files,
        }
    }

    pub fn session(&self) -> &Session<'c> {
        &self.session
    }

    /// Apply one command and return the text to show
    pub async fn execute(&mut self, command: Command) -> String {
        debug!(?command, "Executing command");
        let lang = self.session.language();
        let t = translations(lang);

        match command {
            Command::Help => USAGE.to_string(),
            Command::Language(language) => {
                self.session.set_language(language);
                translations(language).title.to_string()
            }
            Command::Gender(gender) => {
                self.session.set_gender(gender);
                self.render_styles()
            }
            Command::Length(length) => {
                self.session.set_length_filter(length);
                self.render_styles()
            }
            Command::Color(color) => {
                self.session.set_color_filter(color);
                self.render_styles()
            }
            Command::ClearFilters => {
                self.session.clear_filters();
                self.render_styles()
            }
            Command::Styles => self.render_styles(),
            Command::Select(id) => match self.session.select_style(&id) {
                Ok(style) => format!("{} {}", t.selected, style.name(lang)),
                Err(e) => e.message(lang),
            },
            Command::Upload(path) => match self.files.load_upload(&path).await {
                Ok(image) => {
                    self.session.set_upload(image);
                    format!("{}: {}", t.source_placeholder, path.display())
                }
                Err(AppError::NotAnImage(_)) => "Please upload an image file.".to_string(),
                Err(e) => {
                    warn!(path = ?path, error = %e, "Upload failed");
                    e.to_string()
                }
            },
            Command::Generate => match self.session.generate(self.backend.as_ref()).await {
                Ok(()) => format!("{} - {} (save)", t.result_placeholder, t.save_image),
                Err(e) => e.message(lang),
            },
            Command::Save(dir) => self.save(dir).await,
            Command::Reset => {
                self.session.reset();
                t.upload_title.to_string()
            }
            Command::Dismiss => {
                self.session.dismiss_error();
                self.render_status()
            }
            Command::Status => self.render_status(),
            Command::Quit => String::new(),
        }
    }

    async fn save(&self, dir: Option<PathBuf>) -> String {
        let t = translations(self.session.language());
        let Some(result) = self.session.result() else {
            return t.result_placeholder_desc.to_string();
        };

        let saved = match dir {
            Some(dir) => FileHandler::new(dir).save_result(result).await,
            None => self.files.save_result(result).await,
        };
        match saved {
            Ok(path) => format!("{}: {}", t.save_image, path.display()),
            Err(e) => {
                warn!(error = %e, "Saving result failed");
                e.to_string()
            }
        }
    }

    fn render_styles(&self) -> String {
        let lang = self.session.language();
        let t = translations(lang);
        let query = self.session.query();
        let selected = self.session.selected_style().map(|s| s.id.as_str());

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} [{}] {}: {} | {}: {}",
            t.select_style,
            t.gender(query.gender),
            t.filter_length,
            match query.length {
                Filter::All => t.filter_all,
                Filter::Only(l) => t.length(l),
            },
            t.filter_color,
            match query.color {
                Filter::All => t.filter_all,
                Filter::Only(c) => t.color(c),
            },
        );

        let styles = self.session.visible_styles();
        if styles.is_empty() {
            let _ = write!(out, "  {} ({}: clear-filters)", t.no_styles, t.clear_filters);
            return out;
        }

        for style in styles {
            let mark = if selected == Some(style.id.as_str()) { '*' } else { ' ' };
            let _ = writeln!(
                out,
                " {} {:<18} {} - {} ({}, {})",
                mark,
                style.id,
                style.name(lang),
                style.description(lang),
                t.length(style.length),
                t.color(style.color),
            );
        }
        out.trim_end().to_string()
    }

    fn render_status(&self) -> String {
        let lang = self.session.language();
        let t = translations(lang);

        let mut out = String::new();
        let _ = writeln!(out, "{} ({})", t.title, lang);
        match self.session.selected_style() {
            Some(style) => {
                let _ = writeln!(out, "{} {}", t.selected, style.name(lang));
            }
            None => {
                let _ = writeln!(out, "{}", t.select_or_type);
            }
        }
        match self.session.upload() {
            Some(image) => {
                let _ = writeln!(
                    out,
                    "{}: {} ({} bytes)",
                    t.source_placeholder,
                    image.media_type(),
                    image.approx_size()
                );
            }
            None => {
                let _ = writeln!(out, "{}: {} - {}", t.source_placeholder, t.upload_title, t.upload_rec);
            }
        }
        let result_line = match self.session.phase() {
            Phase::Generating => format!("{} - {}", t.styling, t.processing_desc),
            Phase::Succeeded(image) => format!("{} bytes", image.approx_size()),
            _ => t.result_placeholder_desc.to_string(),
        };
        let _ = writeln!(out, "{}: {}", t.result_placeholder, result_line);
        if let Some(banner) = self.session.error_banner() {
            let _ = writeln!(out, "! {}", banner);
        }
        out.trim_end().to_string()
    }

    /// Read commands line by line until `quit` or end of input
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        output
            .write_all(format!("{}\n", self.render_status()).as_bytes())
            .await?;

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let text = match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(Command::Generate) => {
                    let t = translations(self.session.language());
                    if self.session.can_generate() {
                        output
                            .write_all(format!("{}\n", t.processing_desc).as_bytes())
                            .await?;
                        output.flush().await?;
                    }
                    self.execute(Command::Generate).await
                }
                Ok(command) => self.execute(command).await,
                Err(e) => e.to_string(),
            };

            output.write_all(text.as_bytes()).await?;
            output.write_all(b"\n").await?;
            output.flush().await?;
        }

        Ok(())
    }
}
