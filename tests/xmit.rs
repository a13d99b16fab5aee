//! End-to-end tests over synthetic XMIT streams.

use xmi::codec::Codepage;
use xmi::{Archive, Error, ParseOptions};

fn cp() -> Codepage {
    Codepage::default()
}

fn init_logs() {
    let _ = stderrlog::new().verbosity(4).init();
}

/// One segment: length byte (header included), flag byte, payload.
fn segment(flag: u8, payload: &[u8]) -> Vec<u8> {
    assert!(payload.len() <= 253);
    let mut seg = vec![(payload.len() + 2) as u8, flag];
    seg.extend_from_slice(payload);
    seg
}

/// A logical record as data segments, split on the 253-byte payload cap.
fn data_record(record: &[u8]) -> Vec<u8> {
    let chunks: Vec<&[u8]> = record.chunks(253).collect();
    let mut out = Vec::new();
    for (index, chunk) in chunks.iter().enumerate() {
        let mut flag = 0u8;
        if index == 0 {
            flag |= 0x80;
        }
        if index == chunks.len() - 1 {
            flag |= 0x40;
        }
        out.extend(segment(flag, chunk));
    }
    out
}

fn control(record_type: &str, payload: &[u8]) -> Vec<u8> {
    let mut body = cp().encode(record_type);
    body.extend_from_slice(payload);
    segment(0x20, &body)
}

fn unit(key: u16, items: &[&[u8]]) -> Vec<u8> {
    let mut bytes = key.to_be_bytes().to_vec();
    bytes.extend_from_slice(&(items.len() as u16).to_be_bytes());
    for item in items {
        bytes.extend_from_slice(&(item.len() as u16).to_be_bytes());
        bytes.extend_from_slice(item);
    }
    bytes
}

fn char_unit(key: u16, value: &str) -> Vec<u8> {
    unit(key, &[&cp().encode(value)])
}

fn dec_unit(key: u16, value: u32) -> Vec<u8> {
    unit(key, &[&value.to_be_bytes()])
}

fn inmr01() -> Vec<u8> {
    let mut units = char_unit(0x1011, "ORIGIN");
    units.extend(char_unit(0x1012, "HERC01"));
    units.extend(char_unit(0x1001, "TARGET"));
    units.extend(char_unit(0x1002, "HERC02"));
    units.extend(char_unit(0x1024, "20210101123456"));
    units.extend(dec_unit(0x102f, 1));
    control("INMR01", &units)
}

fn inmr02(number: u32, dsn: Option<&str>, dsorg: u16, recfm: u8, extra: &[u8]) -> Vec<u8> {
    let mut payload = number.to_be_bytes().to_vec();
    if let Some(dsn) = dsn {
        let qualifiers: Vec<Vec<u8>> = dsn.split('.').map(|q| cp().encode(q)).collect();
        let items: Vec<&[u8]> = qualifiers.iter().map(Vec::as_slice).collect();
        payload.extend(unit(0x0002, &items));
    }
    payload.extend(unit(0x003c, &[&dsorg.to_be_bytes()]));
    payload.extend(unit(0x0049, &[&[recfm, 0x00]]));
    payload.extend(dec_unit(0x0042, 80));
    payload.extend(extra);
    control("INMR02", &payload)
}

fn inmr03(dsorg: u16, recfm: u8, lrecl: u32) -> Vec<u8> {
    let mut payload = unit(0x003c, &[&dsorg.to_be_bytes()]);
    payload.extend(unit(0x0049, &[&[recfm, 0x00]]));
    payload.extend(dec_unit(0x0042, lrecl));
    control("INMR03", &payload)
}

fn inmr06() -> Vec<u8> {
    control("INMR06", &[])
}

fn fixed_record(text: &str) -> Vec<u8> {
    cp().encode(&format!("{text:<80}"))
}

/// Scenario: minimal transmission of one sequential text file.
fn sequential_xmit() -> Vec<u8> {
    let mut bytes = inmr01();
    bytes.extend(inmr02(1, Some("USER1.TEST.DATA"), 0x4000, 0x90, &[]));
    bytes.extend(inmr03(0x4000, 0x90, 80));
    bytes.extend(data_record(&fixed_record("HELLO")));
    bytes.extend(inmr06());
    bytes
}

#[test]
fn sequential_text_file() {
    init_logs();
    let archive = Archive::parse(&sequential_xmit()).unwrap();
    assert_eq!(archive.list_datasets(), vec!["USER1.TEST.DATA"]);
    assert!(archive.is_sequential("USER1.TEST.DATA").unwrap());
    assert!(archive.list_members("USER1.TEST.DATA").unwrap().is_empty());

    let info = archive.dataset_info("USER1.TEST.DATA").unwrap();
    assert_eq!(info.mimetype, "text/plain");
    assert_eq!(info.owner, "HERC01");
    assert_eq!(info.modified.as_deref(), Some("2021-01-01T12:34:56.000000"));

    assert_eq!(archive.origin_timestamp(), Some("2021-01-01T12:34:56.000000"));
    assert_eq!(archive.origin_user(), Some("HERC01"));
    assert_eq!(archive.target_user(), Some("HERC02"));
    assert_eq!(archive.origin_node(), Some("ORIGIN"));

    assert_eq!(archive.dataset_text("USER1.TEST.DATA").unwrap(), "HELLO\n");
    assert!(matches!(
        archive.member_text("USER1.TEST.DATA", "ANYTHING"),
        Err(Error::UnknownMember(_))
    ));
    assert!(matches!(
        archive.dataset_info("NO.SUCH.DATA"),
        Err(Error::UnknownDataset(_))
    ));
}

#[test]
fn parse_is_idempotent() {
    let bytes = sequential_xmit();
    assert_eq!(Archive::parse(&bytes).unwrap(), Archive::parse(&bytes).unwrap());
}

#[test]
fn inmr06_terminates_parsing() {
    let mut noisy = sequential_xmit();
    noisy.extend([0xde, 0xad, 0xbe, 0xef, 0x00, 0x01]);
    assert_eq!(
        Archive::parse(&noisy).unwrap(),
        Archive::parse(&sequential_xmit()).unwrap()
    );
}

#[test]
fn detection_needs_inmr01() {
    assert!(matches!(
        Archive::parse(b"definitely not a container"),
        Err(Error::NotAContainer)
    ));
}

// IEBCOPY fixtures: an unloaded PDS rides inside the XMIT data records.

fn copyr1_record(recfm: u8) -> Vec<u8> {
    let mut body = vec![0u8; 56];
    body[1] = 0xca;
    body[2] = 0x6d;
    body[3] = 0x0f;
    body[4..6].copy_from_slice(&0x0200u16.to_be_bytes());
    body[6..8].copy_from_slice(&27920u16.to_be_bytes());
    body[8..10].copy_from_slice(&80u16.to_be_bytes());
    body[10] = recfm;
    body
}

fn directory_entry(name: &str, ttr: u32, flag: u8, user_data: &[u8]) -> Vec<u8> {
    let mut entry = cp().encode(&format!("{name:<8}"));
    entry.extend_from_slice(&ttr.to_be_bytes()[1..]);
    entry.push(flag);
    entry.extend_from_slice(user_data);
    entry
}

fn directory_block(entries: &[Vec<u8>]) -> Vec<u8> {
    let mut packed: Vec<u8> = entries.concat();
    packed.extend_from_slice(&[0xff; 12]);
    let mut block = vec![0u8; 20];
    block[8..10].copy_from_slice(&8u16.to_be_bytes());
    block[10..12].copy_from_slice(&0x100u16.to_be_bytes());
    block.extend_from_slice(&((packed.len() + 2) as u16).to_be_bytes());
    block.extend_from_slice(&packed);
    block.resize(276, 0);
    block
}

fn data_block(ttr: u32, payload: &[u8]) -> Vec<u8> {
    let mut block = vec![0u8; 6];
    block.extend_from_slice(&ttr.to_be_bytes()[1..]);
    block.push(0);
    block.extend_from_slice(&(payload.len() as u16).to_be_bytes());
    block.extend_from_slice(payload);
    block
}

/// 30 bytes of ISPF statistics user data.
fn ispf_user_data() -> Vec<u8> {
    let mut user_data = vec![
        0x01, 0x02, // version 01.02
        0x00, // flags
        0x45, // modify seconds
        0x01, 0x21, 0x12, 0x3f, // created: 2021 day 123
        0x01, 0x21, 0x15, 0x0f, 0x09, 0x30, // modified: 2021 day 150, 09:30
    ];
    user_data.extend_from_slice(&12u16.to_be_bytes());
    user_data.extend_from_slice(&12u16.to_be_bytes());
    user_data.extend_from_slice(&0u16.to_be_bytes());
    user_data.extend_from_slice(&cp().encode("HERC01  "));
    user_data
}

fn pds_xmit() -> Vec<u8> {
    let member_payload = fixed_record("HELLO FROM ALPHA");
    let entries = vec![
        directory_entry("ALPHA", 0x000105, 15, &ispf_user_data()),
        directory_entry("BETA", 0x000105, 0x80, &[]),
    ];
    let mut bytes = inmr01();
    bytes.extend(inmr02(1, Some("HERC01.PDS.LOAD"), 0x0200, 0x90, &[]));
    bytes.extend(inmr03(0x0200, 0x90, 80));
    bytes.extend(data_record(&copyr1_record(0x90)));
    bytes.extend(data_record(&[0u8; 276])); // COPYR2
    bytes.extend(data_record(&directory_block(&entries)));
    bytes.extend(data_record(&data_block(0x000105, &member_payload)));
    bytes.extend(data_record(&data_block(0x000105, &[])));
    bytes.extend(inmr06());
    bytes
}

#[test]
fn pds_with_alias() {
    init_logs();
    let archive = Archive::parse(&pds_xmit()).unwrap();
    assert!(archive.is_pds("HERC01.PDS.LOAD").unwrap());
    assert_eq!(
        archive.list_members("HERC01.PDS.LOAD").unwrap(),
        vec!["ALPHA", "BETA"]
    );

    let alpha = archive.member_bytes("HERC01.PDS.LOAD", "ALPHA").unwrap();
    let beta = archive.member_bytes("HERC01.PDS.LOAD", "BETA").unwrap();
    assert_eq!(alpha, beta);
    assert_eq!(alpha, fixed_record("HELLO FROM ALPHA"));

    let info = archive.member_info("HERC01.PDS.LOAD", "BETA").unwrap();
    assert_eq!(info.alias.as_deref(), Some("ALPHA"));
    assert_eq!(info.recfm, "FB");
    assert_eq!(info.lrecl, 80);
    assert_eq!(info.owner.as_deref(), Some("HERC01"));
    assert_eq!(info.version.as_deref(), Some("01.02"));
    assert_eq!(info.modified.as_deref(), Some("2021-05-30T09:30:45.000000"));
    assert!(archive.member_info("HERC01.PDS.LOAD", "ALPHA").unwrap().alias.is_none());

    // text length is what gets reported for text members
    let text = archive.member_text("HERC01.PDS.LOAD", "ALPHA").unwrap();
    assert_eq!(text, "HELLO FROM ALPHA\n");
    assert_eq!(
        archive.member_info("HERC01.PDS.LOAD", "ALPHA").unwrap().size,
        text.len()
    );

    let info = archive.dataset_info("HERC01.PDS.LOAD").unwrap();
    assert_eq!(info.mimetype, "pds/directory");
    assert_eq!(info.size, 80);
}

#[test]
fn ispf_extended_line_counts() {
    // flag 0x10 moves line counts to the 32-bit fields at bytes 28..40
    let mut user_data = ispf_user_data();
    user_data[2] = 0x10;
    user_data.extend_from_slice(&100_000u32.to_be_bytes());
    user_data.extend_from_slice(&100_001u32.to_be_bytes());
    user_data.extend_from_slice(&100_002u32.to_be_bytes());
    assert_eq!(user_data.len(), 40);
    let entries = vec![directory_entry("GAMMA", 0x000105, 20, &user_data)];

    let mut bytes = inmr01();
    bytes.extend(inmr02(1, Some("HERC01.PDS.STATS"), 0x0200, 0x90, &[]));
    bytes.extend(inmr03(0x0200, 0x90, 80));
    bytes.extend(data_record(&copyr1_record(0x90)));
    bytes.extend(data_record(&[0u8; 276]));
    bytes.extend(data_record(&directory_block(&entries)));
    bytes.extend(data_record(&data_block(0x000105, &fixed_record("STATS"))));
    bytes.extend(data_record(&data_block(0x000105, &[])));
    bytes.extend(inmr06());

    let archive = Archive::parse(&bytes).unwrap();
    match &archive {
        Archive::Xmit(xmit) => {
            let pds = xmit.datasets[0].pds().unwrap();
            let ispf = pds.get("GAMMA").unwrap().ispf.as_ref().unwrap();
            assert_eq!(ispf.lines, 100_000);
            assert_eq!(ispf.newlines, 100_001);
            assert_eq!(ispf.modlines, 100_002);
        }
        Archive::Tape(_) => panic!("expected an XMIT archive"),
    }
}

#[test]
fn nested_xmit_payload_is_reclassified() {
    // the dataset's own content is an XMIT stream
    let mut nested = vec![0x00, 0x00];
    nested.extend(cp().encode("INMR01"));
    nested.extend(vec![0x00; 24]);

    let mut bytes = inmr01();
    bytes.extend(inmr02(1, Some("HERC01.NESTED.XMI"), 0x4000, 0xc0, &[]));
    bytes.extend(inmr03(0x4000, 0xc0, 0));
    bytes.extend(data_record(&nested));
    bytes.extend(inmr06());

    let archive = Archive::parse(&bytes).unwrap();
    let dataset = &archive.datasets()[0];
    assert_eq!(dataset.mimetype, "application/xmit");
    assert_eq!(dataset.extension.as_deref(), Some(".xmi"));
    assert!(archive.dataset_text("HERC01.NESTED.XMI").is_err());
}

#[test]
fn message_rides_before_the_file() {
    let mut bytes = inmr01();
    // file 1 is the message: no INMDSNAM, INMTERM marker instead
    let term = unit(0x0028, &[]);
    bytes.extend(inmr02(1, None, 0x4000, 0x90, &term));
    bytes.extend(inmr03(0x4000, 0x90, 40));
    bytes.extend(data_record(&cp().encode(&format!("{:<40}", "READ ME FIRST"))));
    bytes.extend(inmr02(2, Some("USER1.REAL.DATA"), 0x4000, 0x90, &[]));
    bytes.extend(inmr03(0x4000, 0x90, 80));
    bytes.extend(data_record(&fixed_record("CONTENT")));
    bytes.extend(inmr06());

    let archive = Archive::parse(&bytes).unwrap();
    assert_eq!(archive.message_text(), Some("READ ME FIRST\n"));
    assert_eq!(archive.list_datasets(), vec!["USER1.REAL.DATA"]);
    assert_eq!(archive.dataset_text("USER1.REAL.DATA").unwrap(), "CONTENT\n");
}

#[test]
fn data_before_inmr02_is_malformed() {
    let mut bytes = inmr01();
    bytes.extend(data_record(b"ORPHAN DATA"));
    assert!(matches!(
        Archive::parse(&bytes),
        Err(Error::MalformedXmit { .. })
    ));
}

#[test]
fn force_convert_decodes_binary_members() {
    let archive = Archive::parse_with(
        &sequential_xmit(),
        &ParseOptions::new().with_force_convert(true),
    )
    .unwrap();
    // already text; force keeps it text and the extension becomes .txt
    assert_eq!(archive.datasets()[0].extension.as_deref(), Some(".txt"));
}
