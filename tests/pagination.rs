mod common;

use investigation_pdf::{DrawOp, FontSet, PageGeometry, Section, TextMeasure};

fn fifty_long_sections() -> investigation_pdf::DocumentSession {
    let mut session = common::standard_session();
    session.add_title("BERITA ACARA", Some("Nomor: 001")).unwrap();
    for i in 0..50 {
        let section = Section::new(format!("Bagian {}", i + 1), common::paragraph(500));
        session.add_section(&section).unwrap();
    }
    session
}

#[test]
fn title_and_short_section_fit_on_one_page() {
    let mut session = common::standard_session();
    session.add_title("BERITA ACARA", None).unwrap();
    session
        .add_section(&Section::new("Kronologi", "Pertemuan dimulai pukul 09.00."))
        .unwrap();

    assert_eq!(session.page_count(), 1);
    let texts = common::all_texts(&session);
    assert_eq!(texts, ["BERITA ACARA", "Kronologi", "Pertemuan dimulai pukul 09.00."]);

    let bytes = session.save().unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(common::contains(&bytes, b"/Count 1"));
}

#[test]
fn long_document_spills_onto_more_pages() {
    let session = fifty_long_sections();
    let n = session.page_count();
    assert!(n > 1, "expected several pages, got {n}");

    let bytes = session.save().unwrap();
    assert!(common::contains(&bytes, format!("/Count {n}").as_bytes()));
}

#[test]
fn first_page_has_no_header_or_footer() {
    let session = fifty_long_sections();
    let first = &session.pages()[0];
    assert!(!common::has_header(first));
    assert_eq!(common::footer_number(first), None);
}

#[test]
fn overflow_pages_carry_header_and_increasing_footer() {
    let session = fifty_long_sections();
    let pages = session.pages();

    let mut stamps = Vec::new();
    for (i, page) in pages.iter().enumerate().skip(1) {
        assert!(common::has_header(page), "page {} lacks a header", i + 1);
        let stamp = common::footer_number(page)
            .unwrap_or_else(|| panic!("page {} lacks a footer", i + 1));
        stamps.push(stamp);
    }
    assert!(stamps.windows(2).all(|w| w[0] < w[1]), "{stamps:?}");
    // stamps match physical page numbers
    let expected: Vec<u32> = (2..=pages.len() as u32).collect();
    assert_eq!(stamps, expected);
}

#[test]
fn baselines_descend_within_each_page() {
    let session = fifty_long_sections();
    let geometry = session.config().geometry;
    for (i, page) in session.pages().iter().enumerate() {
        let ys = common::body_baselines(page, &geometry);
        assert!(!ys.is_empty(), "page {} is empty", i + 1);
        assert!(
            ys.windows(2).all(|w| w[1] < w[0]),
            "page {} baselines not descending",
            i + 1
        );
    }
}

#[test]
fn body_content_stays_inside_the_margins() {
    let session = fifty_long_sections();
    let g: PageGeometry = session.config().geometry;
    let header = investigation_pdf::Labels::default().header;

    for page in session.pages() {
        for op in page.ops() {
            let DrawOp::Text(t) = op else { continue };
            if t.text == header || t.text.starts_with("Halaman ") {
                continue;
            }
            assert!(t.y >= g.margin_bottom, "{:?} below bottom margin at {}", t.text, t.y);
            assert!(t.y + t.size <= g.content_top() + 0.01, "{:?} above top margin", t.text);
            assert!(t.x >= g.margin_left);
        }
    }
}

#[test]
fn wrapped_lines_fit_the_content_width() {
    let session = fifty_long_sections();
    let fonts = FontSet::standard();
    let width = session.config().geometry.content_width();

    for t in session.pages().iter().flat_map(|p| p.text_ops()) {
        let measured = fonts.get(t.font).text_width(&t.text, t.size);
        assert!(
            measured <= width || !t.text.contains(' '),
            "{:?} measures {measured} > {width}",
            t.text
        );
    }
}

#[test]
fn every_page_uses_a4_geometry() {
    let session = fifty_long_sections();
    for page in session.pages() {
        assert_eq!(page.width, PageGeometry::A4_WIDTH);
        assert_eq!(page.height, PageGeometry::A4_HEIGHT);
    }
}

#[test]
fn oversized_word_overflows_alone_without_breaking_flow() {
    let mut session = common::standard_session();
    let word = "x".repeat(400);
    session
        .add_section(&Section::untitled(format!("awal {word} akhir")))
        .unwrap();
    let texts = common::all_texts(&session);
    assert_eq!(texts, ["awal", word.as_str(), "akhir"]);
}
