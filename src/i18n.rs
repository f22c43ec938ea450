//! Display languages and their string bundles

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::{Gender, HairColor, HairLength};
use crate::error::AppError;

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Zh,
    Vi,
    Th,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::Zh, Language::Vi, Language::Th, Language::En];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
            Language::Vi => "vi",
            Language::Th => "th",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|l| l.code() == code)
            .ok_or_else(|| AppError::InvalidRequest(format!("unsupported language: {}", s)))
    }
}

/// All UI strings for one language
#[derive(Debug)]
pub struct Translations {
    pub title: &'static str,
    pub upload_new: &'static str,
    pub upload_title: &'static str,
    pub upload_drag: &'static str,
    pub upload_rec: &'static str,
    pub select_style: &'static str,
    pub filter_length: &'static str,
    pub filter_color: &'static str,
    pub filter_all: &'static str,
    pub no_styles: &'static str,
    pub clear_filters: &'static str,
    pub selected: &'static str,
    pub select_or_type: &'static str,
    pub generate: &'static str,
    pub processing_title: &'static str,
    pub processing_desc: &'static str,
    pub styling: &'static str,
    pub save_image: &'static str,
    pub error_gen: &'static str,
    pub error_select: &'static str,
    pub error_no_image: &'static str,
    pub result_placeholder: &'static str,
    pub result_placeholder_desc: &'static str,
    pub source_placeholder: &'static str,
    /// Female, Male, Unisex
    pub genders: [&'static str; 3],
    /// Short, Medium, Long
    pub lengths: [&'static str; 3],
    /// Black, Brown, Blonde, Red, Silver, Multicolor
    pub colors: [&'static str; 6],
}

impl Translations {
    pub fn gender(&self, gender: Gender) -> &'static str {
        match gender {
            Gender::Female => self.genders[0],
            Gender::Male => self.genders[1],
            Gender::Unisex => self.genders[2],
        }
    }

    pub fn length(&self, length: HairLength) -> &'static str {
        match length {
            HairLength::Short => self.lengths[0],
            HairLength::Medium => self.lengths[1],
            HairLength::Long => self.lengths[2],
        }
    }

    pub fn color(&self, color: HairColor) -> &'static str {
        match color {
            HairColor::Black => self.colors[0],
            HairColor::Brown => self.colors[1],
            HairColor::Blonde => self.colors[2],
            HairColor::Red => self.colors[3],
            HairColor::Silver => self.colors[4],
            HairColor::Multicolor => self.colors[5],
        }
    }
}

static EN: Translations = Translations {
    title: "HairStyle AI",
    upload_new: "Change Photo",
    upload_title: "Upload Photo",
    upload_drag: "Drag & drop or click",
    upload_rec: "Clear face, good lighting",
    select_style: "Choose a Hairstyle",
    filter_length: "Length",
    filter_color: "Color",
    filter_all: "All",
    no_styles: "No styles match.",
    clear_filters: "Clear",
    selected: "Selected:",
    select_or_type: "Select a style below",
    generate: "Generate Hairstyle",
    processing_title: "Styling...",
    processing_desc: "Creating your new look (5-10s)",
    styling: "Processing",
    save_image: "Download",
    error_gen: "Generation failed. Try again.",
    error_select: "Please select a style first.",
    error_no_image: "Please upload an image first.",
    result_placeholder: "Your Result",
    result_placeholder_desc: "Select a style and click Generate to see the magic happen here.",
    source_placeholder: "Original Image",
    genders: ["Female", "Male", "Unisex"],
    lengths: ["Short", "Medium", "Long"],
    colors: ["Black", "Brown", "Blonde", "Red", "Silver", "Color"],
};

static ZH: Translations = Translations {
    title: "AI 发型工作室",
    upload_new: "更换照片",
    upload_title: "上传照片",
    upload_drag: "拖放或点击上传",
    upload_rec: "建议：面部清晰",
    select_style: "选择发型",
    filter_length: "长度",
    filter_color: "发色",
    filter_all: "全部",
    no_styles: "无匹配发型",
    clear_filters: "清除",
    selected: "已选：",
    select_or_type: "请在下方选择发型",
    generate: "立即生成",
    processing_title: "造型中...",
    processing_desc: "正在生成新发型 (5-10秒)",
    styling: "处理中",
    save_image: "保存图片",
    error_gen: "生成失败，请重试。",
    error_select: "请先选择一个发型。",
    error_no_image: "请先上传一张照片。",
    result_placeholder: "效果展示",
    result_placeholder_desc: "选择发型并点击生成，此处将显示最终效果。",
    source_placeholder: "原始图片",
    genders: ["女士", "男士", "通用"],
    lengths: ["短发", "中发", "长发"],
    colors: ["黑色", "棕色", "金色", "红色", "银色", "彩色"],
};

static VI: Translations = Translations {
    title: "AI Tạo Kiểu Tóc",
    upload_new: "Đổi Ảnh",
    upload_title: "Tải Ảnh",
    upload_drag: "Kéo thả hoặc nhấn",
    upload_rec: "Rõ mặt, đủ sáng",
    select_style: "Chọn Kiểu Tóc",
    filter_length: "Độ Dài",
    filter_color: "Màu",
    filter_all: "Tất cả",
    no_styles: "Không tìm thấy.",
    clear_filters: "Xóa lọc",
    selected: "Đã chọn:",
    select_or_type: "Chọn kiểu bên dưới",
    generate: "Tạo Kiểu Ngay",
    processing_title: "Đang xử lý...",
    processing_desc: "Đang tạo kiểu tóc mới (5-10s)",
    styling: "Đang chạy",
    save_image: "Tải về",
    error_gen: "Thất bại. Thử lại nhé.",
    error_select: "Vui lòng chọn kiểu tóc.",
    error_no_image: "Vui lòng tải ảnh lên trước.",
    result_placeholder: "Kết Quả",
    result_placeholder_desc: "Chọn kiểu và nhấn Tạo để xem kết quả tại đây.",
    source_placeholder: "Ảnh Gốc",
    genders: ["Nữ", "Nam", "Unisex"],
    lengths: ["Ngắn", "Vừa", "Dài"],
    colors: ["Đen", "Nâu", "Vàng", "Đỏ", "Bạc", "Màu"],
};

static TH: Translations = Translations {
    title: "สตูดิโอทรงผม AI",
    upload_new: "เปลี่ยนรูป",
    upload_title: "อัปโหลดรูป",
    upload_drag: "ลากวาง หรือ คลิก",
    upload_rec: "เห็นหน้าชัดเจน",
    select_style: "เลือกทรงผม",
    filter_length: "ความยาว",
    filter_color: "สีผม",
    filter_all: "ทั้งหมด",
    no_styles: "ไม่พบทรงผม",
    clear_filters: "ล้างตัวกรอง",
    selected: "เลือก:",
    select_or_type: "เลือกทรงผมด้านล่าง",
    generate: "สร้างทรงผม",
    processing_title: "กำลังทำผม...",
    processing_desc: "กำลังสร้างลุคใหม่ (5-10 วินาที)",
    styling: "กำลังประมวลผล",
    save_image: "บันทึกรูป",
    error_gen: "เกิดข้อผิดพลาด โปรดลองใหม่",
    error_select: "กรุณาเลือกทรงผมก่อน",
    error_no_image: "กรุณาอัปโหลดรูปภาพก่อน",
    result_placeholder: "ผลลัพธ์",
    result_placeholder_desc: "เลือกทรงผมและกดสร้างเพื่อดูผลลัพธ์ที่นี่",
    source_placeholder: "รูปต้นฉบับ",
    genders: ["หญิง", "ชาย", "ไม่ระบุ"],
    lengths: ["สั้น", "ประบ่า", "ยาว"],
    colors: ["ดำ", "น้ำตาล", "บลอนด์", "แดง", "เงิน", "สีสัน"],
};

/// String bundle for a language
pub fn translations(lang: Language) -> &'static Translations {
    match lang {
        Language::En => &EN,
        Language::Zh => &ZH,
        Language::Vi => &VI,
        Language::Th => &TH,
    }
}
