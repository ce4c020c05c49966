//! Shape XML for the title slide and for content slides

use shared_types::Section;

use super::geometry::{Frame, BODY, SUBTITLE, TITLE, TITLE_SLIDE_TITLE};
use super::parts;
use super::xml_text;

/// Heading size for content slides, in hundredths of a point
const HEADING_SIZE: u32 = 2400;
const BODY_SIZE: u32 = 1400;
const FONT: &str = "Helvetica";

pub fn title_slide(title: &str, subtitle: &str) -> String {
    let shapes = [
        text_shape(
            2,
            "Title 1",
            r#"<p:ph type="ctrTitle"/>"#,
            TITLE_SLIDE_TITLE,
            &plain_paragraph(title),
        ),
        text_shape(
            3,
            "Subtitle 2",
            r#"<p:ph type="subTitle" idx="1"/>"#,
            SUBTITLE,
            &plain_paragraph(subtitle),
        ),
    ]
    .concat();
    parts::slide(&shapes)
}

pub fn content_slide(section: &Section) -> String {
    let heading = format!(
        r#"<a:p><a:r>{}<a:t>{}</a:t></a:r></a:p>"#,
        run_props(HEADING_SIZE, true),
        xml_text(section.title())
    );

    let mut body = String::new();
    for line in section.body().lines() {
        body.push_str(&body_paragraph(line));
    }
    if body.is_empty() {
        body.push_str(r#"<a:p><a:pPr><a:buNone/></a:pPr><a:endParaRPr lang="en-US"/></a:p>"#);
    }

    let shapes = [
        text_shape(2, "Title 1", r#"<p:ph type="title"/>"#, TITLE, &heading),
        text_shape(3, "Content Placeholder 2", r#"<p:ph idx="1"/>"#, BODY, &body),
    ]
    .concat();
    parts::slide(&shapes)
}

fn body_paragraph(line: &str) -> String {
    if line.is_empty() {
        return format!(
            r#"<a:p><a:pPr marL="0" indent="0"><a:buNone/></a:pPr><a:endParaRPr lang="en-US" sz="{BODY_SIZE}"/></a:p>"#
        );
    }
    format!(
        r#"<a:p><a:pPr marL="0" indent="0"><a:buNone/></a:pPr><a:r>{}<a:t>{}</a:t></a:r></a:p>"#,
        run_props(BODY_SIZE, false),
        xml_text(line)
    )
}

fn plain_paragraph(text: &str) -> String {
    format!(r#"<a:p><a:r><a:rPr lang="en-US"/><a:t>{}</a:t></a:r></a:p>"#, xml_text(text))
}

fn run_props(size: u32, bold: bool) -> String {
    let b = if bold { r#" b="1""# } else { "" };
    format!(
        r#"<a:rPr lang="en-US" sz="{size}"{b} dirty="0"><a:solidFill><a:srgbClr val="000000"/></a:solidFill><a:latin typeface="{FONT}"/><a:cs typeface="{FONT}"/></a:rPr>"#
    )
}

fn text_shape(id: u32, name: &str, ph: &str, frame: Frame, paragraphs: &str) -> String {
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="{name}"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr>{ph}</p:nvPr></p:nvSpPr><p:spPr>{xfrm}</p:spPr><p:txBody><a:bodyPr wrap="square"><a:normAutofit/></a:bodyPr><a:lstStyle/>{paragraphs}</p:txBody></p:sp>"#,
        xfrm = frame.xfrm()
    )
}
