use investigation_pdf::FormattingError;
use investigation_pdf::format::*;
use serde_json::json;

#[test]
fn unknown_codes_pass_through() {
    assert_eq!(format_status(Some("UNKNOWN_CODE")), "UNKNOWN_CODE");
    assert_eq!(format_priority(Some("UNKNOWN_CODE")), "UNKNOWN_CODE");
}

#[test]
fn known_codes_get_labels() {
    assert_eq!(format_status(Some("COMPLETED")), "Selesai");
    assert_eq!(format_status(Some("IN_PROGRESS")), "Dalam Proses");
    assert_eq!(format_priority(Some("HIGH")), "Tinggi");
    assert_eq!(format_priority(Some("URGENT")), "Mendesak");
}

#[test]
fn missing_codes_become_placeholder() {
    assert_eq!(format_status(None), "-");
    assert_eq!(format_status(Some("  ")), "-");
    assert_eq!(format_priority(None), "-");
}

#[test]
fn dates_use_indonesian_month_names() {
    assert_eq!(format_date(Some("2026-10-14")), "14 Oktober 2026");
    assert_eq!(format_date(Some("2026-01-05T23:59:00")), "5 Januari 2026");
    assert_eq!(format_date(Some("2026-08-17 08:00:00")), "17 Agustus 2026");
    assert_eq!(
        format_date_time(Some("2026-10-14T09:30:00Z")),
        "14 Oktober 2026 09:30"
    );
}

#[test]
fn explicit_offsets_are_not_converted() {
    assert_eq!(
        format_date_time(Some("2026-12-31T23:15:00+07:00")),
        "31 Desember 2026 23:15"
    );
}

#[test]
fn missing_or_invalid_dates_become_placeholder() {
    assert_eq!(format_date(None), "-");
    assert_eq!(format_date(Some("")), "-");
    assert_eq!(format_date(Some("kemarin sore")), "-");
    assert_eq!(format_date(Some("2026-13-40")), "-");
    assert_eq!(format_date_time(None), "-");
}

#[test]
fn malformed_party_record_gets_substitutions() {
    let lines = format_parties_present(&json!([{ "name": null, "status": "BOGUS" }]));
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("1. "));
    assert!(lines[0].contains("N/A"));
    assert_eq!(lines[0], "1. N/A (N/A) - BOGUS");
}

#[test]
fn empty_or_null_lists_become_placeholder() {
    assert_eq!(format_evidence_files(&json!([])), ["-"]);
    assert_eq!(format_evidence_files(&json!(null)), ["-"]);
    assert_eq!(format_parties_present(&json!([])), ["-"]);
    assert_eq!(format_satgas_members(&json!(null)), ["-"]);
    assert_eq!(format_recommended_actions(&json!([])), ["-"]);
}

#[test]
fn parties_are_numbered_with_role_and_attendance() {
    let lines = format_parties_present(&json!([
        { "name": "Andi Wijaya", "role": "WITNESS", "status": "PRESENT" },
        { "user": { "fullName": "Sari Putri" }, "role": "REPORTER", "attendance": "EXCUSED",
          "notes": "Hadir melalui konferensi video" },
    ]));
    assert_eq!(
        lines,
        [
            "1. Andi Wijaya (Saksi) - Hadir",
            "2. Sari Putri (Pelapor) - Izin: Hadir melalui konferensi video",
        ]
    );
}

#[test]
fn party_notes_are_truncated() {
    let notes = "n".repeat(150);
    let lines = format_parties_present(&json!([{ "name": "A", "notes": notes }]));
    let expected = format!("1. A (N/A) - N/A: {}...", "n".repeat(100));
    assert_eq!(lines, [expected]);
}

#[test]
fn members_resolve_nested_user_names() {
    let lines = format_satgas_members(&json!([
        { "user": { "name": "Rina Kartika" }, "role": "CHAIRPERSON" },
        { "name": "Joko", "position": "MEMBER" },
        { "role": "SECRETARY" },
    ]));
    assert_eq!(
        lines,
        ["1. Rina Kartika - Ketua", "2. Joko - Anggota", "3. N/A - Sekretaris"]
    );
}

#[test]
fn evidence_lists_name_type_and_short_description() {
    let long = "d".repeat(130);
    let lines = format_evidence_files(&json!([
        { "fileName": "foto.jpg", "fileType": "image/jpeg", "description": "Foto lokasi" },
        { "fileName": "rekaman.mp3", "description": long },
        { "mimeType": "application/pdf" },
    ]));
    assert_eq!(lines[0], "1. foto.jpg (image/jpeg) - Foto lokasi");
    assert_eq!(lines[1], format!("2. rekaman.mp3 (N/A) - {}...", "d".repeat(100)));
    assert_eq!(lines[2], "3. N/A (application/pdf)");
}

#[test]
fn actions_accept_text_and_records() {
    let long = "a".repeat(250);
    let lines = format_recommended_actions(&json!([
        "Melakukan pendampingan psikologis",
        { "action": "Audit prosedur", "responsible": "Sari", "deadline": "2026-11-01" },
        long,
        { "deadline": "bukan tanggal" },
    ]));
    assert_eq!(lines[0], "1. Melakukan pendampingan psikologis");
    assert_eq!(lines[1], "2. Audit prosedur (PIC: Sari) - Tenggat: 1 November 2026");
    assert_eq!(lines[2], format!("3. {}...", "a".repeat(200)));
    assert_eq!(lines[3], "4. N/A - Tenggat: -");
}

#[test]
fn wrong_shape_yields_single_fallback_line() {
    assert_eq!(
        format_parties_present(&json!("Andi, Sari")),
        ["Error formatting parties present"]
    );
    assert_eq!(
        format_evidence_files(&json!({ "fileName": "x" })),
        ["Error formatting evidence files"]
    );
    assert_eq!(
        format_satgas_members(&json!([{ "name": "A" }, 42])),
        ["Error formatting satgas members"]
    );
    assert_eq!(
        format_recommended_actions(&json!([true])),
        ["Error formatting recommended actions"]
    );
}

#[test]
fn inner_formatters_report_the_failure() {
    assert_eq!(
        try_format_parties_present(&json!("x")),
        Err(FormattingError::NotAList("text"))
    );
    assert_eq!(
        try_format_satgas_members(&json!([{ "name": "A" }, 42])),
        Err(FormattingError::InvalidRecord { index: 1, kind: "a number" })
    );
    assert_eq!(
        try_format_evidence_files(&json!([])),
        Ok(vec!["-".to_string()])
    );
}
