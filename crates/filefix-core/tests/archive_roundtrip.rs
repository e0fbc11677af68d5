//! Integration test: batch -> gate -> archive -> read back with a standard ZIP reader.

use chrono::NaiveDate;
use filefix_core::archive::{self, ArchiveOptions};
use filefix_core::batch::{FileBatch, RawFile};
use filefix_core::entitlement::{authorize, CallerEntitlement, GateDecision, Tier};
use filefix_core::usage::{QuotaConfig, UsageLedger};
use filefix_core::CasingStyle;
use std::io::{Cursor, Read};

fn entries(blob: &[u8]) -> Vec<(String, Vec<u8>)> {
    let mut zip = zip::ZipArchive::new(Cursor::new(blob)).expect("valid zip");
    (0..zip.len())
        .map(|i| {
            let mut entry = zip.by_index(i).unwrap();
            let mut buf = Vec::new();
            entry.read_to_end(&mut buf).unwrap();
            (entry.name().to_string(), buf)
        })
        .collect()
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

#[test]
fn free_caller_batch_is_gated_and_archived() {
    let mut batch = FileBatch::new(10);
    batch
        .add(vec![
            RawFile::new("Holiday Photo.JPG", vec![0xff, 0xd8, 0x00, 0x01]),
            RawFile::new("holiday-photo.jpg", vec![0x89, b'P', b'N', b'G']),
            RawFile::new("Notes (final).TXT", b"line one\nline two\n".to_vec()),
        ])
        .unwrap();

    let ledger = UsageLedger::new(&QuotaConfig::default());
    let decision = authorize(
        CallerEntitlement::default(),
        &ledger,
        "anonymous",
        batch.len() as u32,
        day(),
    )
    .unwrap();
    assert!(matches!(decision, GateDecision::Metered(r) if r.used == 3 && r.remaining == 5));

    let blob = archive::assemble(batch.files(), CasingStyle::Kebab).unwrap();
    assert_eq!(
        entries(&blob),
        vec![
            ("holiday-photo.jpg".to_string(), vec![0xff, 0xd8, 0x00, 0x01]),
            ("holiday-photo-1.jpg".to_string(), vec![0x89, b'P', b'N', b'G']),
            ("notes-final.txt".to_string(), b"line one\nline two\n".to_vec()),
        ]
    );
}

#[test]
fn over_quota_request_is_refused_before_assembly() {
    let ledger = UsageLedger::new(&QuotaConfig { free_daily_limit: 2 });
    let err = authorize(CallerEntitlement::default(), &ledger, "anonymous", 3, day()).unwrap_err();
    assert_eq!(err.limit, 2);
    assert_eq!(ledger.stats("anonymous", day()).used, 0);

    let paid = CallerEntitlement::new(Tier::Paid);
    assert_eq!(
        authorize(paid, &ledger, "paying@example.com", 3, day()).unwrap(),
        GateDecision::Unlimited
    );
}

#[tokio::test]
async fn async_assembly_keeps_all_entries() {
    let files: Vec<RawFile> = (0..25)
        .map(|i| RawFile::new(format!("Scan {i:02}.PDF"), vec![i as u8; 1024 * (i + 1)]))
        .collect();
    let blob = archive::assemble_async(files.clone(), ArchiveOptions::new(CasingStyle::Camel), None)
        .await
        .unwrap();

    let read = entries(&blob);
    assert_eq!(read.len(), files.len());
    for (i, (name, content)) in read.iter().enumerate() {
        assert_eq!(name, &format!("scan{i:02}.pdf"));
        assert_eq!(content, &files[i].content);
    }
}
