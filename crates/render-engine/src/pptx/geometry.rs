//! Slide dimensions and placeholder frames, in EMU

/// One hundredth of an inch
const EMU_PER_CENTI_INCH: i64 = 9_144;

/// 13.333in x 7.5in (16:9)
pub const SLIDE_WIDTH: i64 = 12_192_000;
pub const SLIDE_HEIGHT: i64 = 6_858_000;

/// A positioned rectangle on the slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

impl Frame {
    const fn centi_inches(x: i64, y: i64, cx: i64, cy: i64) -> Self {
        Self {
            x: x * EMU_PER_CENTI_INCH,
            y: y * EMU_PER_CENTI_INCH,
            cx: cx * EMU_PER_CENTI_INCH,
            cy: cy * EMU_PER_CENTI_INCH,
        }
    }

    pub fn xfrm(&self) -> String {
        format!(
            r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
            self.x, self.y, self.cx, self.cy
        )
    }
}

pub const TITLE_SLIDE_TITLE: Frame = Frame::centi_inches(100, 220, 1133, 150);
pub const SUBTITLE: Frame = Frame::centi_inches(100, 390, 1133, 100);
pub const TITLE: Frame = Frame::centi_inches(60, 40, 1213, 100);
pub const BODY: Frame = Frame::centi_inches(60, 160, 1213, 540);
