//! Integration tests for hOCR parsing, text and confidence.

use unhocr::error::Error;
use unhocr::meta::{self, BBox};
use unhocr::{parse_bytes, NodeKind, ReportOptions};

/// Two pages as Tesseract writes them, with areas and paragraphs around lines.
const TESSERACT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN"
    "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">
<html xmlns="http://www.w3.org/1999/xhtml" xml:lang="en" lang="en">
 <head>
  <title></title>
  <meta http-equiv="Content-Type" content="text/html;charset=utf-8"/>
  <meta name='ocr-system' content='tesseract 5.3.0' />
  <meta name='ocr-capabilities' content='ocr_page ocr_carea ocr_par ocr_line ocrx_word ocrp_wconf'/>
  <meta name='ocr-langs' content='eng lat'/>
 </head>
 <body>
  <div class='ocr_page' id='page_1' title='image "scan_001.png"; bbox 0 0 2480 3508; ppageno 0'>
   <div class='ocr_carea' id='block_1_1' title="bbox 294 276 2191 399">
    <p class='ocr_par' id='par_1_1' lang='eng' title="bbox 294 276 2191 399">
     <span class='ocr_line' id='line_1_1' title="bbox 294 276 2191 330; baseline 0 -11; x_size 54; x_descenders 11; x_ascenders 14">
      <span class='ocrx_word' id='word_1_1' title='bbox 294 276 488 320; x_wconf 96'>Chapter</span>
      <span class='ocrx_word' id='word_1_2' title='bbox 512 276 560 320; x_wconf 92'>One</span>
     </span>
     <span class='ocr_line' id='line_1_2' title="bbox 294 345 1200 399; baseline 0 -12; x_size 54">
      <span class='ocrx_word' id='word_1_3' title='bbox 294 345 400 399; x_wconf 71'>It</span>
      <span class='ocrx_word' id='word_1_4' title='bbox 420 345 600 399; x_wconf 61'>was &amp; is</span>
     </span>
    </p>
   </div>
  </div>
  <div class='ocr_page' id='page_2' title='image "scan_002.png"; bbox 0 0 2480 3508; ppageno 1'>
   <div class='ocr_carea' id='block_2_1' title="bbox 300 300 900 360">
    <span class='ocr_caption' id='line_2_1' title="bbox 300 300 900 360; x_size 40">
     <span class='ocrx_word' id='word_2_1' title='bbox 300 300 900 360; x_wconf 80'>Figure</span>
    </span>
   </div>
  </div>
 </body>
</html>
"#;

#[test]
fn test_parse_tesseract_output() {
    let doc = parse_bytes(TESSERACT.as_bytes()).unwrap();

    assert_eq!(doc.page_count(), 2);
    assert_eq!(doc.line_count(), 3);
    assert_eq!(doc.word_count(), 5);

    assert_eq!(doc.info.system.as_deref(), Some("tesseract 5.3.0"));
    assert!(doc.info.has_capability("ocrp_wconf"));
    assert_eq!(doc.info.langs, vec!["eng", "lat"]);

    let page = doc.get_page(1).unwrap();
    assert_eq!(page.kind, NodeKind::Page);
    assert_eq!(page.meta()["image"], "\"scan_001.png\"");

    let ids: Vec<&str> = doc.lines().map(|line| line.id.as_str()).collect();
    assert_eq!(ids, vec!["line_1_1", "line_1_2", "line_2_1"]);
}

#[test]
fn test_line_geometry_and_ids() {
    let doc = parse_bytes(TESSERACT.as_bytes()).unwrap();
    let line = doc.lines().next().unwrap();

    assert_eq!(line.bbox().unwrap(), BBox::new(294, 276, 2191, 330));
    assert_eq!(line.short_id(), "1");
    assert_eq!(line.meta()["x_size"], "54");
    assert_eq!(line.meta()["baseline"], "0 -11");
}

#[test]
fn test_plain_text_matches_line_texts() {
    let doc = parse_bytes(TESSERACT.as_bytes()).unwrap();

    let expected: String = doc
        .lines()
        .map(|line| format!("{}\n", line.line_text()))
        .collect();
    assert_eq!(doc.plain_text(), expected);
    assert_eq!(doc.plain_text(), "Chapter One\nIt was & is\nFigure\n");
}

#[test]
fn test_crlf_line_ends() {
    let markup = "<div class='ocr_page'>\r\n\
        <span class='ocr_line' id='line_1_1' title='bbox 0 0 10 10'>\r\n  \
        <span class='ocrx_word' title='x_wconf 90'>Hello</span>\r\n  \
        <span class='ocrx_word' title='x_wconf 80'>world</span>\r\n\
        </span>\r\n</div>";
    let doc = parse_bytes(markup.as_bytes()).unwrap();

    let line = doc.lines().next().unwrap();
    assert_eq!(line.line_text(), "Hello world");
    assert_eq!(doc.plain_text(), "Hello world\n");
}

#[test]
fn test_crlf_document_reads_like_lf() {
    let crlf = TESSERACT.replace('\n', "\r\n");
    let lf_doc = parse_bytes(TESSERACT.as_bytes()).unwrap();
    let crlf_doc = parse_bytes(crlf.as_bytes()).unwrap();

    assert_eq!(crlf_doc.plain_text(), lf_doc.plain_text());
    assert!(crlf_doc.lines().all(|line| !line.text.contains('\r')));
}

#[test]
fn test_confidence() {
    let doc = parse_bytes(TESSERACT.as_bytes()).unwrap();

    assert_eq!(
        meta::all_word_confidences(&doc).unwrap(),
        vec![96.0, 92.0, 71.0, 61.0, 80.0]
    );
    assert_eq!(meta::document_average_confidence(&doc).unwrap(), 80.0);

    let second = doc.lines().nth(1).unwrap();
    assert_eq!(meta::line_average_confidence(second).unwrap(), 66.0);
}

#[test]
fn test_confidence_without_words() {
    let doc = parse_bytes(b"<html><body><div class='ocr_page'></div></body></html>").unwrap();
    assert!(matches!(
        meta::document_average_confidence(&doc),
        Err(Error::NoWordsFound)
    ));
    assert!(meta::all_word_confidences(&doc).unwrap().is_empty());
}

#[test]
fn test_word_missing_confidence() {
    let markup = "<div class='ocr_page'><span class='ocr_line' title='bbox 0 0 1 1'>\
        <span class='ocrx_word' title='bbox 0 0 1 1'>x</span></span></div>";
    let doc = parse_bytes(markup.as_bytes()).unwrap();
    assert!(matches!(
        meta::all_word_confidences(&doc),
        Err(Error::MissingConfidence)
    ));
}

#[test]
fn test_malformed_documents() {
    for markup in [
        "",
        "   \n",
        "<html><body><div class='ocr_page'>",
        "<html><body></div></body></html>",
        "<div class='ocr_page'><span class='ocr_line'></div></span>",
    ] {
        assert!(
            matches!(parse_bytes(markup.as_bytes()), Err(Error::MalformedMarkup(_))),
            "accepted {:?}",
            markup
        );
    }
}

#[test]
fn test_report_lists_lines_per_page() {
    let doc = parse_bytes(TESSERACT.as_bytes()).unwrap();
    let options = ReportOptions::new().with_words(true).with_confidence(true);
    let report = unhocr::render::Report::from_document(&doc, &options);

    assert_eq!(report.pages.len(), 2);
    assert_eq!(report.pages[0].lines.len(), 2);
    assert_eq!(report.pages[1].lines.len(), 1);

    let line = &report.pages[0].lines[1];
    assert_eq!(line.id, "line_1_2");
    assert_eq!(line.text, "It was & is");
    assert_eq!(line.confidence, Some(66.0));
    assert_eq!(line.words.len(), 2);
    assert_eq!(line.words[1].text, "was & is");
    assert_eq!(line.words[1].meta["x_wconf"], "61");
}
