//! End-to-end tests over synthetic AWS and HET tape images.

use std::io::Write;

use bzip2::write::BzEncoder;
use flate2::Compression;
use flate2::write::ZlibEncoder;

use xmi::codec::Codepage;
use xmi::tape::{BZIP2, ENDREC, EOF, NEWREC, ZLIB};
use xmi::{Archive, Error};

fn cp() -> Codepage {
    Codepage::default()
}

fn block(flags: u16, payload: &[u8]) -> Vec<u8> {
    let mut bytes = (payload.len() as u16).to_le_bytes().to_vec();
    bytes.extend_from_slice(&0u16.to_le_bytes());
    bytes.extend_from_slice(&flags.to_be_bytes());
    bytes.extend_from_slice(payload);
    bytes
}

fn label(content: &str) -> Vec<u8> {
    cp().encode(&format!("{content:<80}"))
}

fn labeled_tape(data: &[Vec<u8>]) -> Vec<u8> {
    let mut bytes = block(NEWREC | ENDREC, &label("VOL1HERC01"));
    bytes.extend(block(
        NEWREC | ENDREC,
        &label(&format!("HDR1{:<17}{:<6}0001", "HERC01.TEST.CNTL", "HERC01")),
    ));
    bytes.extend(block(NEWREC | ENDREC, &label("HDR2F3276000080")));
    bytes.extend(block(EOF, &[]));
    for record in data {
        bytes.extend(block(NEWREC | ENDREC, record));
    }
    bytes.extend(block(EOF, &[]));
    bytes.extend(block(NEWREC | ENDREC, &label("EOF1")));
    bytes.extend(block(NEWREC | ENDREC, &label("EOF2")));
    bytes.extend(block(EOF, &[]));
    bytes.extend(block(EOF, &[]));
    bytes
}

#[test]
fn aws_labeled_text_file() {
    let bytes = labeled_tape(&[label("DISPLAY 'HELLO'")]);
    let archive = Archive::parse(&bytes).unwrap();

    assert_eq!(archive.volser(), Some("HERC01"));
    assert_eq!(archive.list_datasets(), vec!["HERC01.TEST.CNTL"]);
    assert!(archive.is_sequential("HERC01.TEST.CNTL").unwrap());
    assert_eq!(
        archive.dataset_text("HERC01.TEST.CNTL").unwrap(),
        "DISPLAY 'HELLO'\n"
    );

    let info = archive.dataset_info("HERC01.TEST.CNTL").unwrap();
    assert_eq!(info.mimetype, "text/plain");
    assert_eq!(info.size, 80);
}

#[test]
fn het_zlib_matches_uncompressed_baseline() {
    let clear = label("COMPRESS ME PLEASE");

    let mut plain = block(NEWREC | ENDREC, &clear);
    plain.extend(block(EOF, &[]));
    let baseline = Archive::parse(&plain).unwrap();

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&clear).unwrap();
    let packed = encoder.finish().unwrap();
    let mut het = block(NEWREC | ENDREC | ZLIB, &packed);
    het.extend(block(EOF, &[]));
    let archive = Archive::parse(&het).unwrap();

    assert_eq!(
        archive.dataset_bytes("FILE0001").unwrap(),
        baseline.dataset_bytes("FILE0001").unwrap()
    );
    assert_eq!(archive, baseline);
}

#[test]
fn het_bzip2_blocks_decompress() {
    let clear = label("SQUEEZE ME PLEASE");
    let mut encoder = BzEncoder::new(Vec::new(), bzip2::Compression::default());
    encoder.write_all(&clear).unwrap();
    let packed = encoder.finish().unwrap();

    let mut bytes = block(NEWREC | ENDREC | BZIP2, &packed);
    bytes.extend(block(EOF, &[]));
    let archive = Archive::parse(&bytes).unwrap();
    assert_eq!(archive.dataset_bytes("FILE0001").unwrap(), clear);
}

#[test]
fn zero_flag_block_is_malformed() {
    let bytes = block(0x0000, &[0x01, 0x02]);
    assert!(matches!(
        Archive::parse(&bytes),
        Err(Error::MalformedTape { at_offset: 4, .. })
    ));
}

// An unloaded PDS inside a tape dataset: every IEBCOPY block carries an
// 8-byte BDW/SDW prefix on tape.

fn bdw_block(payload: &[u8]) -> Vec<u8> {
    let total = (payload.len() + 8) as u16;
    let mut block = total.to_be_bytes().to_vec();
    block.extend_from_slice(&[0x00, 0x00]);
    block.extend_from_slice(&(total - 4).to_be_bytes());
    block.extend_from_slice(&[0x00, 0x00]);
    block.extend_from_slice(payload);
    block
}

fn copyr1_body(recfm: u8) -> Vec<u8> {
    let mut body = vec![0u8; 56];
    body[1] = 0xca;
    body[2] = 0x6d;
    body[3] = 0x0f;
    body[4..6].copy_from_slice(&0x0200u16.to_be_bytes());
    body[8..10].copy_from_slice(&80u16.to_be_bytes());
    body[10] = recfm;
    body
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

fn directory_entry(name: &str, ttr: u32, flag: u8) -> Vec<u8> {
    let mut entry = cp().encode(&format!("{name:<8}"));
    entry.extend_from_slice(&ttr.to_be_bytes()[1..]);
    entry.push(flag);
    entry
}

fn data_block(ttr: u32, payload: &[u8]) -> Vec<u8> {
    let mut block = vec![0u8; 6];
    block.extend_from_slice(&ttr.to_be_bytes()[1..]);
    block.push(0);
    block.extend_from_slice(&(payload.len() as u16).to_be_bytes());
    block.extend_from_slice(payload);
    block
}

#[test]
fn pds_on_tape() {
    let member_payload = cp().encode(&format!("{:<80}", "TAPE MEMBER DATA"));

    // one tape record holding the whole unload, BDW-framed
    let mut record = bdw_block(&copyr1_body(0x90));
    record.extend(bdw_block(&[0u8; 276])); // COPYR2
    record.extend(bdw_block(&directory_block(&[
        directory_entry("SOLO", 0x000103, 0),
    ])));
    record.extend(bdw_block(&data_block(0x000103, &member_payload)));
    record.extend(bdw_block(&data_block(0x000103, &[])));
    record.extend(bdw_block(&[0u8; 12])); // end of members marker

    let bytes = labeled_tape(&[record]);
    let archive = Archive::parse(&bytes).unwrap();

    assert!(archive.is_pds("HERC01.TEST.CNTL").unwrap());
    assert_eq!(archive.list_members("HERC01.TEST.CNTL").unwrap(), vec!["SOLO"]);
    assert_eq!(
        archive.member_bytes("HERC01.TEST.CNTL", "SOLO").unwrap(),
        member_payload
    );
    assert_eq!(
        archive.member_text("HERC01.TEST.CNTL", "SOLO").unwrap(),
        "TAPE MEMBER DATA\n"
    );
    let info = archive.member_info("HERC01.TEST.CNTL", "SOLO").unwrap();
    assert_eq!(info.recfm, "FB");
    assert_eq!(info.lrecl, 80);
}

#[test]
fn user_labels_surface_at_archive_level() {
    let mut bytes = block(NEWREC | ENDREC, &label("UTL1SCRATCH POOL TAPE"));
    bytes.extend(block(NEWREC | ENDREC, &label("SOME ACTUAL CONTENT")));
    bytes.extend(block(EOF, &[]));
    let archive = Archive::parse(&bytes).unwrap();
    assert_eq!(archive.user_labels(), ["SCRATCH POOL TAPE".to_string()]);
}
