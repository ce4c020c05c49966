//! Package-level OOXML parts: content types, relationships, master,
//! layouts, theme and document properties

use chrono::{DateTime, Utc};

use super::geometry::{Frame, BODY, SLIDE_HEIGHT, SLIDE_WIDTH, SUBTITLE, TITLE, TITLE_SLIDE_TITLE};
use super::xml_text;

pub const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

const NS_PML: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;

const REL_SLIDE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const REL_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const REL_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
const REL_THEME: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";

/// Which layout a slide uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Title,
    TitleAndContent,
}

impl Layout {
    pub fn part_name(&self) -> &'static str {
        match self {
            Layout::Title => "slideLayout1.xml",
            Layout::TitleAndContent => "slideLayout2.xml",
        }
    }
}

pub fn content_types(slide_count: usize) -> String {
    let mut slides = String::new();
    for n in 1..=slide_count {
        slides.push_str(&format!(
            r#"<Override PartName="/ppt/slides/slide{n}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#
        ));
    }
    format!(
        r#"{XML_DECL}<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/><Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/><Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/><Override PartName="/ppt/slideLayouts/slideLayout2.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/><Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/><Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/><Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>{slides}</Types>"#
    )
}

pub fn root_rels() -> String {
    format!(
        r#"{XML_DECL}<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/><Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/></Relationships>"#
    )
}

pub fn core_props(title: &str, created: DateTime<Utc>) -> String {
    let stamp = created.format("%Y-%m-%dT%H:%M:%SZ");
    let title = xml_text(title);
    format!(
        r#"{XML_DECL}<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><dc:title>{title}</dc:title><dc:creator>insightdeck</dc:creator><dcterms:created xsi:type="dcterms:W3CDTF">{stamp}</dcterms:created><dcterms:modified xsi:type="dcterms:W3CDTF">{stamp}</dcterms:modified></cp:coreProperties>"#
    )
}

pub fn app_props(slide_count: usize) -> String {
    format!(
        r#"{XML_DECL}<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties"><Application>insightdeck</Application><PresentationFormat>Widescreen</PresentationFormat><Slides>{slide_count}</Slides></Properties>"#
    )
}

/// rId1 is the master, rId2 the theme, slides follow from rId3
pub fn presentation(slide_count: usize) -> String {
    let mut ids = String::new();
    for n in 0..slide_count {
        ids.push_str(&format!(
            r#"<p:sldId id="{}" r:id="rId{}"/>"#,
            256 + n,
            n + 3
        ));
    }
    format!(
        r#"{XML_DECL}<p:presentation {NS_PML} saveSubsetFonts="1"><p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst><p:sldIdLst>{ids}</p:sldIdLst><p:sldSz cx="{SLIDE_WIDTH}" cy="{SLIDE_HEIGHT}"/><p:notesSz cx="6858000" cy="9144000"/></p:presentation>"#
    )
}

pub fn presentation_rels(slide_count: usize) -> String {
    let mut rels = format!(
        r#"<Relationship Id="rId1" Type="{REL_MASTER}" Target="slideMasters/slideMaster1.xml"/><Relationship Id="rId2" Type="{REL_THEME}" Target="theme/theme1.xml"/>"#
    );
    for n in 1..=slide_count {
        rels.push_str(&format!(
            r#"<Relationship Id="rId{}" Type="{REL_SLIDE}" Target="slides/slide{n}.xml"/>"#,
            n + 2
        ));
    }
    relationships(&rels)
}

pub fn slide_rels(layout: Layout) -> String {
    relationships(&format!(
        r#"<Relationship Id="rId1" Type="{REL_LAYOUT}" Target="../slideLayouts/{}"/>"#,
        layout.part_name()
    ))
}

pub fn layout_rels() -> String {
    relationships(&format!(
        r#"<Relationship Id="rId1" Type="{REL_MASTER}" Target="../slideMasters/slideMaster1.xml"/>"#
    ))
}

pub fn master_rels() -> String {
    relationships(&format!(
        r#"<Relationship Id="rId1" Type="{REL_LAYOUT}" Target="../slideLayouts/slideLayout1.xml"/><Relationship Id="rId2" Type="{REL_LAYOUT}" Target="../slideLayouts/slideLayout2.xml"/><Relationship Id="rId3" Type="{REL_THEME}" Target="../theme/theme1.xml"/>"#
    ))
}

fn relationships(inner: &str) -> String {
    format!(
        r#"{XML_DECL}<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{inner}</Relationships>"#
    )
}

/// Group shape header every `p:spTree` starts with
pub const SP_TREE_HEADER: &str = r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#;

/// An empty placeholder shape for masters and layouts
fn placeholder(id: u32, name: &str, ph: &str, frame: Frame) -> String {
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="{name}"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr>{ph}</p:nvPr></p:nvSpPr><p:spPr>{xfrm}</p:spPr><p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp>"#,
        xfrm = frame.xfrm()
    )
}

pub fn slide_master() -> String {
    let shapes = [
        placeholder(2, "Title Placeholder 1", r#"<p:ph type="title"/>"#, TITLE),
        placeholder(3, "Text Placeholder 2", r#"<p:ph type="body" idx="1"/>"#, BODY),
    ]
    .concat();
    format!(
        r#"{XML_DECL}<p:sldMaster {NS_PML}><p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg><p:spTree>{SP_TREE_HEADER}{shapes}</p:spTree></p:cSld><p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/><p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/><p:sldLayoutId id="2147483650" r:id="rId2"/></p:sldLayoutIdLst><p:txStyles><p:titleStyle><a:lvl1pPr algn="l"><a:defRPr sz="4400"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mj-lt"/></a:defRPr></a:lvl1pPr></p:titleStyle><p:bodyStyle><a:lvl1pPr marL="228600" indent="-228600"><a:buFont typeface="Arial"/><a:buChar char="&#8226;"/><a:defRPr sz="2000"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/></a:defRPr></a:lvl1pPr></p:bodyStyle><p:otherStyle><a:lvl1pPr><a:defRPr/></a:lvl1pPr></p:otherStyle></p:txStyles></p:sldMaster>"#
    )
}

pub fn slide_layout(layout: Layout) -> String {
    let (attrs, name, shapes) = match layout {
        Layout::Title => (
            r#"type="title" preserve="1""#,
            "Title Slide",
            [
                placeholder(2, "Title 1", r#"<p:ph type="ctrTitle"/>"#, TITLE_SLIDE_TITLE),
                placeholder(3, "Subtitle 2", r#"<p:ph type="subTitle" idx="1"/>"#, SUBTITLE),
            ]
            .concat(),
        ),
        Layout::TitleAndContent => (
            r#"type="obj" preserve="1""#,
            "Title and Content",
            [
                placeholder(2, "Title 1", r#"<p:ph type="title"/>"#, TITLE),
                placeholder(3, "Content Placeholder 2", r#"<p:ph idx="1"/>"#, BODY),
            ]
            .concat(),
        ),
    };
    format!(
        r#"{XML_DECL}<p:sldLayout {NS_PML} {attrs}><p:cSld name="{name}"><p:spTree>{SP_TREE_HEADER}{shapes}</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>"#
    )
}

/// Slide wrapper around a finished shape list
pub fn slide(shapes: &str) -> String {
    format!(
        r#"{XML_DECL}<p:sld {NS_PML}><p:cSld><p:spTree>{SP_TREE_HEADER}{shapes}</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>"#
    )
}

pub fn theme() -> String {
    let fill = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#.repeat(3);
    let line = r#"<a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#
        .repeat(3);
    let effect = "<a:effectStyle><a:effectLst/></a:effectStyle>".repeat(3);
    format!(
        r#"{XML_DECL}<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Insight"><a:themeElements><a:clrScheme name="Insight"><a:dk1><a:srgbClr val="000000"/></a:dk1><a:lt1><a:srgbClr val="FFFFFF"/></a:lt1><a:dk2><a:srgbClr val="051C2C"/></a:dk2><a:lt2><a:srgbClr val="E7E6E6"/></a:lt2><a:accent1><a:srgbClr val="2251FF"/></a:accent1><a:accent2><a:srgbClr val="00A9F4"/></a:accent2><a:accent3><a:srgbClr val="1F40E6"/></a:accent3><a:accent4><a:srgbClr val="AAE6F0"/></a:accent4><a:accent5><a:srgbClr val="3C96B4"/></a:accent5><a:accent6><a:srgbClr val="8C5AC8"/></a:accent6><a:hlink><a:srgbClr val="0563C1"/></a:hlink><a:folHlink><a:srgbClr val="954F72"/></a:folHlink></a:clrScheme><a:fontScheme name="Insight"><a:majorFont><a:latin typeface="Helvetica"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont><a:minorFont><a:latin typeface="Helvetica"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont></a:fontScheme><a:fmtScheme name="Insight"><a:fillStyleLst>{fill}</a:fillStyleLst><a:lnStyleLst>{line}</a:lnStyleLst><a:effectStyleLst>{effect}</a:effectStyleLst><a:bgFillStyleLst>{fill}</a:bgFillStyleLst></a:fmtScheme></a:themeElements><a:objectDefaults/><a:extraClrSchemeLst/></a:theme>"#
    )
}
