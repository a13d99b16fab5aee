//! Byte to Unicode tables for the supported EBCDIC code pages.
//!
//! Generated from the glibc iconv IBM CDRA converters; positions a
//! code page leaves unassigned map to U+FFFD.

pub(super) const CP037: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}', // 0x00
    '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}', // 0x20
    '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
    ' ', '\u{00a0}', '\u{00e2}', '\u{00e4}', '\u{00e0}', '\u{00e1}', '\u{00e3}', '\u{00e5}', // 0x40
    '\u{00e7}', '\u{00f1}', '\u{00a2}', '.', '<', '(', '+', '|',
    '&', '\u{00e9}', '\u{00ea}', '\u{00eb}', '\u{00e8}', '\u{00ed}', '\u{00ee}', '\u{00ef}',
    '\u{00ec}', '\u{00df}', '!', '$', '*', ')', ';', '\u{00ac}',
    '-', '/', '\u{00c2}', '\u{00c4}', '\u{00c0}', '\u{00c1}', '\u{00c3}', '\u{00c5}', // 0x60
    '\u{00c7}', '\u{00d1}', '\u{00a6}', ',', '%', '_', '>', '?',
    '\u{00f8}', '\u{00c9}', '\u{00ca}', '\u{00cb}', '\u{00c8}', '\u{00cd}', '\u{00ce}', '\u{00cf}',
    '\u{00cc}', '`', ':', '#', '@', '\'', '=', '"',
    '\u{00d8}', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{00ab}', '\u{00bb}', '\u{00f0}', '\u{00fd}', '\u{00fe}', '\u{00b1}',
    '\u{00b0}', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', '\u{00aa}', '\u{00ba}', '\u{00e6}', '\u{00b8}', '\u{00c6}', '\u{00a4}',
    '\u{00b5}', '~', 's', 't', 'u', 'v', 'w', 'x', // 0xa0
    'y', 'z', '\u{00a1}', '\u{00bf}', '\u{00d0}', '\u{00dd}', '\u{00de}', '\u{00ae}',
    '^', '\u{00a3}', '\u{00a5}', '\u{00b7}', '\u{00a9}', '\u{00a7}', '\u{00b6}', '\u{00bc}',
    '\u{00bd}', '\u{00be}', '[', ']', '\u{00af}', '\u{00a8}', '\u{00b4}', '\u{00d7}',
    '{', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xc0
    'H', 'I', '\u{00ad}', '\u{00f4}', '\u{00f6}', '\u{00f2}', '\u{00f3}', '\u{00f5}',
    '}', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
    'Q', 'R', '\u{00b9}', '\u{00fb}', '\u{00fc}', '\u{00f9}', '\u{00fa}', '\u{00ff}',
    '\\', '\u{00f7}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xe0
    'Y', 'Z', '\u{00b2}', '\u{00d4}', '\u{00d6}', '\u{00d2}', '\u{00d3}', '\u{00d5}',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', '\u{00b3}', '\u{00db}', '\u{00dc}', '\u{00d9}', '\u{00da}', '\u{009f}',
];

pub(super) const CP273: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}', // 0x00
    '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}', // 0x20
    '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
    ' ', '\u{00a0}', '\u{00e2}', '{', '\u{00e0}', '\u{00e1}', '\u{00e3}', '\u{00e5}', // 0x40
    '\u{00e7}', '\u{00f1}', '\u{00c4}', '.', '<', '(', '+', '!',
    '&', '\u{00e9}', '\u{00ea}', '\u{00eb}', '\u{00e8}', '\u{00ed}', '\u{00ee}', '\u{00ef}',
    '\u{00ec}', '~', '\u{00dc}', '$', '*', ')', ';', '^',
    '-', '/', '\u{00c2}', '[', '\u{00c0}', '\u{00c1}', '\u{00c3}', '\u{00c5}', // 0x60
    '\u{00c7}', '\u{00d1}', '\u{00f6}', ',', '%', '_', '>', '?',
    '\u{00f8}', '\u{00c9}', '\u{00ca}', '\u{00cb}', '\u{00c8}', '\u{00cd}', '\u{00ce}', '\u{00cf}',
    '\u{00cc}', '`', ':', '#', '\u{00a7}', '\'', '=', '"',
    '\u{00d8}', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{00ab}', '\u{00bb}', '\u{00f0}', '\u{00fd}', '\u{00fe}', '\u{00b1}',
    '\u{00b0}', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', '\u{00aa}', '\u{00ba}', '\u{00e6}', '\u{00b8}', '\u{00c6}', '\u{00a4}',
    '\u{00b5}', '\u{00df}', 's', 't', 'u', 'v', 'w', 'x', // 0xa0
    'y', 'z', '\u{00a1}', '\u{00bf}', '\u{00d0}', '\u{00dd}', '\u{00de}', '\u{00ae}',
    '\u{00a2}', '\u{00a3}', '\u{00a5}', '\u{00b7}', '\u{00a9}', '@', '\u{00b6}', '\u{00bc}',
    '\u{00bd}', '\u{00be}', '\u{00ac}', '|', '\u{00af}', '\u{00a8}', '\u{00b4}', '\u{00d7}',
    '\u{00e4}', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xc0
    'H', 'I', '\u{00ad}', '\u{00f4}', '\u{00a6}', '\u{00f2}', '\u{00f3}', '\u{00f5}',
    '\u{00fc}', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
    'Q', 'R', '\u{00b9}', '\u{00fb}', '}', '\u{00f9}', '\u{00fa}', '\u{00ff}',
    '\u{00d6}', '\u{00f7}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xe0
    'Y', 'Z', '\u{00b2}', '\u{00d4}', '\\', '\u{00d2}', '\u{00d3}', '\u{00d5}',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', '\u{00b3}', '\u{00db}', ']', '\u{00d9}', '\u{00da}', '\u{009f}',
];

pub(super) const CP277: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}', // 0x00
    '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}', // 0x20
    '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
    ' ', '\u{00a0}', '\u{00e2}', '\u{00e4}', '\u{00e0}', '\u{00e1}', '\u{00e3}', '}', // 0x40
    '\u{00e7}', '\u{00f1}', '#', '.', '<', '(', '+', '!',
    '&', '\u{00e9}', '\u{00ea}', '\u{00eb}', '\u{00e8}', '\u{00ed}', '\u{00ee}', '\u{00ef}',
    '\u{00ec}', '\u{00df}', '\u{00a4}', '\u{00c5}', '*', ')', ';', '^',
    '-', '/', '\u{00c2}', '\u{00c4}', '\u{00c0}', '\u{00c1}', '\u{00c3}', '$', // 0x60
    '\u{00c7}', '\u{00d1}', '\u{00f8}', ',', '%', '_', '>', '?',
    '\u{00a6}', '\u{00c9}', '\u{00ca}', '\u{00cb}', '\u{00c8}', '\u{00cd}', '\u{00ce}', '\u{00cf}',
    '\u{00cc}', '`', ':', '\u{00c6}', '\u{00d8}', '\'', '=', '"',
    '@', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{00ab}', '\u{00bb}', '\u{00f0}', '\u{00fd}', '\u{00fe}', '\u{00b1}',
    '\u{00b0}', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', '\u{00aa}', '\u{00ba}', '{', '\u{00b8}', '[', ']',
    '\u{00b5}', '\u{00fc}', 's', 't', 'u', 'v', 'w', 'x', // 0xa0
    'y', 'z', '\u{00a1}', '\u{00bf}', '\u{00d0}', '\u{00dd}', '\u{00de}', '\u{00ae}',
    '\u{00a2}', '\u{00a3}', '\u{00a5}', '\u{00b7}', '\u{00a9}', '\u{00a7}', '\u{00b6}', '\u{00bc}',
    '\u{00bd}', '\u{00be}', '\u{00ac}', '|', '\u{00af}', '\u{00a8}', '\u{00b4}', '\u{00d7}',
    '\u{00e6}', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xc0
    'H', 'I', '\u{00ad}', '\u{00f4}', '\u{00f6}', '\u{00f2}', '\u{00f3}', '\u{00f5}',
    '\u{00e5}', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
    'Q', 'R', '\u{00b9}', '\u{00fb}', '~', '\u{00f9}', '\u{00fa}', '\u{00ff}',
    '\\', '\u{00f7}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xe0
    'Y', 'Z', '\u{00b2}', '\u{00d4}', '\u{00d6}', '\u{00d2}', '\u{00d3}', '\u{00d5}',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', '\u{00b3}', '\u{00db}', '\u{00dc}', '\u{00d9}', '\u{00da}', '\u{009f}',
];

pub(super) const CP278: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}', // 0x00
    '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}', // 0x20
    '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
    ' ', '\u{00a0}', '\u{00e2}', '{', '\u{00e0}', '\u{00e1}', '\u{00e3}', '}', // 0x40
    '\u{00e7}', '\u{00f1}', '\u{00a7}', '.', '<', '(', '+', '!',
    '&', '`', '\u{00ea}', '\u{00eb}', '\u{00e8}', '\u{00ed}', '\u{00ee}', '\u{00ef}',
    '\u{00ec}', '\u{00df}', '\u{00a4}', '\u{00c5}', '*', ')', ';', '^',
    '-', '/', '\u{00c2}', '#', '\u{00c0}', '\u{00c1}', '\u{00c3}', '$', // 0x60
    '\u{00c7}', '\u{00d1}', '\u{00f6}', ',', '%', '_', '>', '?',
    '\u{00f8}', '\u{00c9}', '\u{00ca}', '\u{00cb}', '\u{00c8}', '\u{00cd}', '\u{00ce}', '\u{00cf}',
    '\u{00cc}', '\u{00e9}', ':', '\u{00c4}', '\u{00d6}', '\'', '=', '"',
    '\u{00d8}', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{00ab}', '\u{00bb}', '\u{00f0}', '\u{00fd}', '\u{00fe}', '\u{00b1}',
    '\u{00b0}', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', '\u{00aa}', '\u{00ba}', '\u{00e6}', '\u{00b8}', '\u{00c6}', ']',
    '\u{00b5}', '\u{00fc}', 's', 't', 'u', 'v', 'w', 'x', // 0xa0
    'y', 'z', '\u{00a1}', '\u{00bf}', '\u{00d0}', '\u{00dd}', '\u{00de}', '\u{00ae}',
    '\u{00a2}', '\u{00a3}', '\u{00a5}', '\u{00b7}', '\u{00a9}', '[', '\u{00b6}', '\u{00bc}',
    '\u{00bd}', '\u{00be}', '\u{00ac}', '|', '\u{00af}', '\u{00a8}', '\u{00b4}', '\u{00d7}',
    '\u{00e4}', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xc0
    'H', 'I', '\u{00ad}', '\u{00f4}', '\u{00a6}', '\u{00f2}', '\u{00f3}', '\u{00f5}',
    '\u{00e5}', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
    'Q', 'R', '\u{00b9}', '\u{00fb}', '~', '\u{00f9}', '\u{00fa}', '\u{00ff}',
    '\\', '\u{00f7}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xe0
    'Y', 'Z', '\u{00b2}', '\u{00d4}', '@', '\u{00d2}', '\u{00d3}', '\u{00d5}',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', '\u{00b3}', '\u{00db}', '\u{00dc}', '\u{00d9}', '\u{00da}', '\u{009f}',
];

pub(super) const CP280: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}', // 0x00
    '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}', // 0x20
    '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
    ' ', '\u{00a0}', '\u{00e2}', '\u{00e4}', '{', '\u{00e1}', '\u{00e3}', '\u{00e5}', // 0x40
    '\\', '\u{00f1}', '\u{00b0}', '.', '<', '(', '+', '!',
    '&', ']', '\u{00ea}', '\u{00eb}', '}', '\u{00ed}', '\u{00ee}', '\u{00ef}',
    '~', '\u{00df}', '\u{00e9}', '$', '*', ')', ';', '^',
    '-', '/', '\u{00c2}', '\u{00c4}', '\u{00c0}', '\u{00c1}', '\u{00c3}', '\u{00c5}', // 0x60
    '\u{00c7}', '\u{00d1}', '\u{00f2}', ',', '%', '_', '>', '?',
    '\u{00f8}', '\u{00c9}', '\u{00ca}', '\u{00cb}', '\u{00c8}', '\u{00cd}', '\u{00ce}', '\u{00cf}',
    '\u{00cc}', '\u{00f9}', ':', '\u{00a3}', '\u{00a7}', '\'', '=', '"',
    '\u{00d8}', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{00ab}', '\u{00bb}', '\u{00f0}', '\u{00fd}', '\u{00fe}', '\u{00b1}',
    '[', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', '\u{00aa}', '\u{00ba}', '\u{00e6}', '\u{00b8}', '\u{00c6}', '\u{00a4}',
    '\u{00b5}', '\u{00ec}', 's', 't', 'u', 'v', 'w', 'x', // 0xa0
    'y', 'z', '\u{00a1}', '\u{00bf}', '\u{00d0}', '\u{00dd}', '\u{00de}', '\u{00ae}',
    '\u{00a2}', '#', '\u{00a5}', '\u{00b7}', '\u{00a9}', '@', '\u{00b6}', '\u{00bc}',
    '\u{00bd}', '\u{00be}', '\u{00ac}', '|', '\u{00af}', '\u{00a8}', '\u{00b4}', '\u{00d7}',
    '\u{00e0}', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xc0
    'H', 'I', '\u{00ad}', '\u{00f4}', '\u{00f6}', '\u{00a6}', '\u{00f3}', '\u{00f5}',
    '\u{00e8}', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
    'Q', 'R', '\u{00b9}', '\u{00fb}', '\u{00fc}', '`', '\u{00fa}', '\u{00ff}',
    '\u{00e7}', '\u{00f7}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xe0
    'Y', 'Z', '\u{00b2}', '\u{00d4}', '\u{00d6}', '\u{00d2}', '\u{00d3}', '\u{00d5}',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', '\u{00b3}', '\u{00db}', '\u{00dc}', '\u{00d9}', '\u{00da}', '\u{009f}',
];

pub(super) const CP284: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}', // 0x00
    '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}', // 0x20
    '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
    ' ', '\u{00a0}', '\u{00e2}', '\u{00e4}', '\u{00e0}', '\u{00e1}', '\u{00e3}', '\u{00e5}', // 0x40
    '\u{00e7}', '\u{00a6}', '[', '.', '<', '(', '+', '|',
    '&', '\u{00e9}', '\u{00ea}', '\u{00eb}', '\u{00e8}', '\u{00ed}', '\u{00ee}', '\u{00ef}',
    '\u{00ec}', '\u{00df}', ']', '$', '*', ')', ';', '\u{00ac}',
    '-', '/', '\u{00c2}', '\u{00c4}', '\u{00c0}', '\u{00c1}', '\u{00c3}', '\u{00c5}', // 0x60
    '\u{00c7}', '#', '\u{00f1}', ',', '%', '_', '>', '?',
    '\u{00f8}', '\u{00c9}', '\u{00ca}', '\u{00cb}', '\u{00c8}', '\u{00cd}', '\u{00ce}', '\u{00cf}',
    '\u{00cc}', '`', ':', '\u{00d1}', '@', '\'', '=', '"',
    '\u{00d8}', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{00ab}', '\u{00bb}', '\u{00f0}', '\u{00fd}', '\u{00fe}', '\u{00b1}',
    '\u{00b0}', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', '\u{00aa}', '\u{00ba}', '\u{00e6}', '\u{00b8}', '\u{00c6}', '\u{00a4}',
    '\u{00b5}', '\u{00a8}', 's', 't', 'u', 'v', 'w', 'x', // 0xa0
    'y', 'z', '\u{00a1}', '\u{00bf}', '\u{00d0}', '\u{00dd}', '\u{00de}', '\u{00ae}',
    '\u{00a2}', '\u{00a3}', '\u{00a5}', '\u{00b7}', '\u{00a9}', '\u{00a7}', '\u{00b6}', '\u{00bc}',
    '\u{00bd}', '\u{00be}', '^', '!', '\u{00af}', '~', '\u{00b4}', '\u{00d7}',
    '{', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xc0
    'H', 'I', '\u{00ad}', '\u{00f4}', '\u{00f6}', '\u{00f2}', '\u{00f3}', '\u{00f5}',
    '}', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
    'Q', 'R', '\u{00b9}', '\u{00fb}', '\u{00fc}', '\u{00f9}', '\u{00fa}', '\u{00ff}',
    '\\', '\u{00f7}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xe0
    'Y', 'Z', '\u{00b2}', '\u{00d4}', '\u{00d6}', '\u{00d2}', '\u{00d3}', '\u{00d5}',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', '\u{00b3}', '\u{00db}', '\u{00dc}', '\u{00d9}', '\u{00da}', '\u{009f}',
];

pub(super) const CP285: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}', // 0x00
    '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}', // 0x20
    '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
    ' ', '\u{00a0}', '\u{00e2}', '\u{00e4}', '\u{00e0}', '\u{00e1}', '\u{00e3}', '\u{00e5}', // 0x40
    '\u{00e7}', '\u{00f1}', '$', '.', '<', '(', '+', '|',
    '&', '\u{00e9}', '\u{00ea}', '\u{00eb}', '\u{00e8}', '\u{00ed}', '\u{00ee}', '\u{00ef}',
    '\u{00ec}', '\u{00df}', '!', '\u{00a3}', '*', ')', ';', '\u{00ac}',
    '-', '/', '\u{00c2}', '\u{00c4}', '\u{00c0}', '\u{00c1}', '\u{00c3}', '\u{00c5}', // 0x60
    '\u{00c7}', '\u{00d1}', '\u{00a6}', ',', '%', '_', '>', '?',
    '\u{00f8}', '\u{00c9}', '\u{00ca}', '\u{00cb}', '\u{00c8}', '\u{00cd}', '\u{00ce}', '\u{00cf}',
    '\u{00cc}', '`', ':', '#', '@', '\'', '=', '"',
    '\u{00d8}', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{00ab}', '\u{00bb}', '\u{00f0}', '\u{00fd}', '\u{00fe}', '\u{00b1}',
    '\u{00b0}', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', '\u{00aa}', '\u{00ba}', '\u{00e6}', '\u{00b8}', '\u{00c6}', '\u{00a4}',
    '\u{00b5}', '\u{203e}', 's', 't', 'u', 'v', 'w', 'x', // 0xa0
    'y', 'z', '\u{00a1}', '\u{00bf}', '\u{00d0}', '\u{00dd}', '\u{00de}', '\u{00ae}',
    '\u{00a2}', '[', '\u{00a5}', '\u{00b7}', '\u{00a9}', '\u{00a7}', '\u{00b6}', '\u{00bc}',
    '\u{00bd}', '\u{00be}', '^', ']', '~', '\u{00a8}', '\u{00b4}', '\u{00d7}',
    '{', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xc0
    'H', 'I', '\u{00ad}', '\u{00f4}', '\u{00f6}', '\u{00f2}', '\u{00f3}', '\u{00f5}',
    '}', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
    'Q', 'R', '\u{00b9}', '\u{00fb}', '\u{00fc}', '\u{00f9}', '\u{00fa}', '\u{00ff}',
    '\\', '\u{00f7}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xe0
    'Y', 'Z', '\u{00b2}', '\u{00d4}', '\u{00d6}', '\u{00d2}', '\u{00d3}', '\u{00d5}',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', '\u{00b3}', '\u{00db}', '\u{00dc}', '\u{00d9}', '\u{00da}', '\u{009f}',
];

pub(super) const CP297: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}', // 0x00
    '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}', // 0x20
    '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
    ' ', '\u{00a0}', '\u{00e2}', '\u{00e4}', '@', '\u{00e1}', '\u{00e3}', '\u{00e5}', // 0x40
    '\\', '\u{00f1}', '\u{00b0}', '.', '<', '(', '+', '!',
    '&', '{', '\u{00ea}', '\u{00eb}', '}', '\u{00ed}', '\u{00ee}', '\u{00ef}',
    '\u{00ec}', '\u{00df}', '\u{00a7}', '$', '*', ')', ';', '^',
    '-', '/', '\u{00c2}', '\u{00c4}', '\u{00c0}', '\u{00c1}', '\u{00c3}', '\u{00c5}', // 0x60
    '\u{00c7}', '\u{00d1}', '\u{00f9}', ',', '%', '_', '>', '?',
    '\u{00f8}', '\u{00c9}', '\u{00ca}', '\u{00cb}', '\u{00c8}', '\u{00cd}', '\u{00ce}', '\u{00cf}',
    '\u{00cc}', '\u{00b5}', ':', '\u{00a3}', '\u{00e0}', '\'', '=', '"',
    '\u{00d8}', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{00ab}', '\u{00bb}', '\u{00f0}', '\u{00fd}', '\u{00fe}', '\u{00b1}',
    '[', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', '\u{00aa}', '\u{00ba}', '\u{00e6}', '\u{00b8}', '\u{00c6}', '\u{00a4}',
    '`', '\u{00a8}', 's', 't', 'u', 'v', 'w', 'x', // 0xa0
    'y', 'z', '\u{00a1}', '\u{00bf}', '\u{00d0}', '\u{00dd}', '\u{00de}', '\u{00ae}',
    '\u{00a2}', '#', '\u{00a5}', '\u{00b7}', '\u{00a9}', ']', '\u{00b6}', '\u{00bc}',
    '\u{00bd}', '\u{00be}', '\u{00ac}', '|', '\u{00af}', '~', '\u{00b4}', '\u{00d7}',
    '\u{00e9}', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xc0
    'H', 'I', '\u{00ad}', '\u{00f4}', '\u{00f6}', '\u{00f2}', '\u{00f3}', '\u{00f5}',
    '\u{00e8}', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
    'Q', 'R', '\u{00b9}', '\u{00fb}', '\u{00fc}', '\u{00a6}', '\u{00fa}', '\u{00ff}',
    '\u{00e7}', '\u{00f7}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xe0
    'Y', 'Z', '\u{00b2}', '\u{00d4}', '\u{00d6}', '\u{00d2}', '\u{00d3}', '\u{00d5}',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', '\u{00b3}', '\u{00db}', '\u{00dc}', '\u{00d9}', '\u{00da}', '\u{009f}',
];

pub(super) const CP420: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}', // 0x00
    '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}', // 0x20
    '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
    ' ', '\u{00a0}', '\u{0651}', '\u{fe7d}', '\u{0640}', '\u{fffd}', '\u{0621}', '\u{0622}', // 0x40
    '\u{fe82}', '\u{0623}', '\u{00a2}', '.', '<', '(', '+', '|',
    '&', '\u{fe84}', '\u{0624}', '\u{fffd}', '\u{fffd}', '\u{0626}', '\u{0627}', '\u{fe8e}',
    '\u{0628}', '\u{fe91}', '!', '$', '*', ')', ';', '\u{00ac}',
    '-', '/', '\u{0629}', '\u{062a}', '\u{fe97}', '\u{062b}', '\u{fe9b}', '\u{062c}', // 0x60
    '\u{fe9f}', '\u{062d}', '\u{00a6}', ',', '%', '_', '>', '?',
    '\u{fea3}', '\u{062e}', '\u{fea7}', '\u{062f}', '\u{0630}', '\u{0631}', '\u{0632}', '\u{0633}',
    '\u{feb3}', '\u{060c}', ':', '#', '@', '\'', '=', '"',
    '\u{0634}', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{feb7}', '\u{0635}', '\u{febb}', '\u{0636}', '\u{febf}', '\u{0637}',
    '\u{0638}', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', '\u{0639}', '\u{feca}', '\u{fecb}', '\u{fecc}', '\u{063a}', '\u{fece}',
    '\u{fecf}', '\u{00f7}', 's', 't', 'u', 'v', 'w', 'x', // 0xa0
    'y', 'z', '\u{fed0}', '\u{0641}', '\u{fed3}', '\u{0642}', '\u{fed7}', '\u{0643}',
    '\u{fedb}', '\u{0644}', '\u{fef5}', '\u{fef6}', '\u{fef7}', '\u{fef8}', '\u{fffd}', '\u{fffd}',
    '\u{fefb}', '\u{fefc}', '\u{fedf}', '\u{0645}', '\u{fee3}', '\u{0646}', '\u{fee7}', '\u{0647}',
    '\u{061b}', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xc0
    'H', 'I', '\u{00ad}', '\u{feeb}', '\u{fffd}', '\u{feec}', '\u{fffd}', '\u{0648}',
    '\u{061f}', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
    'Q', 'R', '\u{0649}', '\u{fef0}', '\u{064a}', '\u{fef2}', '\u{fef3}', '\u{0660}',
    '\u{00d7}', '\u{fffd}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xe0
    'Y', 'Z', '\u{0661}', '\u{0662}', '\u{fffd}', '\u{0663}', '\u{0664}', '\u{0665}',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', '\u{fffd}', '\u{0666}', '\u{0667}', '\u{0668}', '\u{0669}', '\u{009f}',
];

pub(super) const CP424: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}', // 0x00
    '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}', // 0x20
    '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
    ' ', '\u{05d0}', '\u{05d1}', '\u{05d2}', '\u{05d3}', '\u{05d4}', '\u{05d5}', '\u{05d6}', // 0x40
    '\u{05d7}', '\u{05d8}', '\u{00a2}', '.', '<', '(', '+', '|',
    '&', '\u{05d9}', '\u{05da}', '\u{05db}', '\u{05dc}', '\u{05dd}', '\u{05de}', '\u{05df}',
    '\u{05e0}', '\u{05e1}', '!', '$', '*', ')', ';', '\u{00ac}',
    '-', '/', '\u{05e2}', '\u{05e3}', '\u{05e4}', '\u{05e5}', '\u{05e6}', '\u{05e7}', // 0x60
    '\u{05e8}', '\u{05e9}', '\u{00a6}', ',', '%', '_', '>', '?',
    '\u{fffd}', '\u{05ea}', '\u{fffd}', '\u{fffd}', '\u{00a0}', '\u{fffd}', '\u{fffd}', '\u{fffd}',
    '\u{21d4}', '`', ':', '#', '@', '\'', '=', '"',
    '\u{fffd}', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{00ab}', '\u{00bb}', '\u{fffd}', '\u{fffd}', '\u{fffd}', '\u{fffd}',
    '\u{00b0}', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', '\u{fffd}', '\u{fffd}', '\u{fffd}', '\u{00b8}', '\u{fffd}', '\u{00a4}',
    '\u{00b5}', '~', 's', 't', 'u', 'v', 'w', 'x', // 0xa0
    'y', 'z', '\u{fffd}', '\u{fffd}', '\u{fffd}', '\u{fffd}', '\u{fffd}', '\u{00ae}',
    '^', '\u{00a3}', '\u{00a5}', '\u{00b7}', '\u{00a9}', '\u{00a7}', '\u{00b6}', '\u{00bc}',
    '\u{00bd}', '\u{00be}', '[', ']', '\u{00af}', '\u{00a8}', '\u{00b4}', '\u{00d7}',
    '{', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xc0
    'H', 'I', '\u{00ad}', '\u{fffd}', '\u{fffd}', '\u{fffd}', '\u{fffd}', '\u{fffd}',
    '}', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
    'Q', 'R', '\u{00b9}', '\u{fffd}', '\u{fffd}', '\u{fffd}', '\u{fffd}', '\u{fffd}',
    '\\', '\u{00f7}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xe0
    'Y', 'Z', '\u{00b2}', '\u{fffd}', '\u{fffd}', '\u{fffd}', '\u{fffd}', '\u{fffd}',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', '\u{00b3}', '\u{fffd}', '\u{fffd}', '\u{fffd}', '\u{fffd}', '\u{009f}',
];

pub(super) const CP500: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}', // 0x00
    '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}', // 0x20
    '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
    ' ', '\u{00a0}', '\u{00e2}', '\u{00e4}', '\u{00e0}', '\u{00e1}', '\u{00e3}', '\u{00e5}', // 0x40
    '\u{00e7}', '\u{00f1}', '[', '.', '<', '(', '+', '!',
    '&', '\u{00e9}', '\u{00ea}', '\u{00eb}', '\u{00e8}', '\u{00ed}', '\u{00ee}', '\u{00ef}',
    '\u{00ec}', '\u{00df}', ']', '$', '*', ')', ';', '^',
    '-', '/', '\u{00c2}', '\u{00c4}', '\u{00c0}', '\u{00c1}', '\u{00c3}', '\u{00c5}', // 0x60
    '\u{00c7}', '\u{00d1}', '\u{00a6}', ',', '%', '_', '>', '?',
    '\u{00f8}', '\u{00c9}', '\u{00ca}', '\u{00cb}', '\u{00c8}', '\u{00cd}', '\u{00ce}', '\u{00cf}',
    '\u{00cc}', '`', ':', '#', '@', '\'', '=', '"',
    '\u{00d8}', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{00ab}', '\u{00bb}', '\u{00f0}', '\u{00fd}', '\u{00fe}', '\u{00b1}',
    '\u{00b0}', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', '\u{00aa}', '\u{00ba}', '\u{00e6}', '\u{00b8}', '\u{00c6}', '\u{00a4}',
    '\u{00b5}', '~', 's', 't', 'u', 'v', 'w', 'x', // 0xa0
    'y', 'z', '\u{00a1}', '\u{00bf}', '\u{00d0}', '\u{00dd}', '\u{00de}', '\u{00ae}',
    '\u{00a2}', '\u{00a3}', '\u{00a5}', '\u{00b7}', '\u{00a9}', '\u{00a7}', '\u{00b6}', '\u{00bc}',
    '\u{00bd}', '\u{00be}', '\u{00ac}', '|', '\u{00af}', '\u{00a8}', '\u{00b4}', '\u{00d7}',
    '{', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xc0
    'H', 'I', '\u{00ad}', '\u{00f4}', '\u{00f6}', '\u{00f2}', '\u{00f3}', '\u{00f5}',
    '}', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
    'Q', 'R', '\u{00b9}', '\u{00fb}', '\u{00fc}', '\u{00f9}', '\u{00fa}', '\u{00ff}',
    '\\', '\u{00f7}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xe0
    'Y', 'Z', '\u{00b2}', '\u{00d4}', '\u{00d6}', '\u{00d2}', '\u{00d3}', '\u{00d5}',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', '\u{00b3}', '\u{00db}', '\u{00dc}', '\u{00d9}', '\u{00da}', '\u{009f}',
];

pub(super) const CP875: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}', // 0x00
    '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}', // 0x20
    '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
    ' ', '\u{0391}', '\u{0392}', '\u{0393}', '\u{0394}', '\u{0395}', '\u{0396}', '\u{0397}', // 0x40
    '\u{0398}', '\u{0399}', '[', '.', '<', '(', '+', '!',
    '&', '\u{039a}', '\u{039b}', '\u{039c}', '\u{039d}', '\u{039e}', '\u{039f}', '\u{03a0}',
    '\u{03a1}', '\u{03a3}', ']', '$', '*', ')', ';', '^',
    '-', '/', '\u{03a4}', '\u{03a5}', '\u{03a6}', '\u{03a7}', '\u{03a8}', '\u{03a9}', // 0x60
    '\u{03aa}', '\u{03ab}', '\u{fffd}', ',', '%', '_', '>', '?',
    '\u{00a8}', '\u{0386}', '\u{0388}', '\u{0389}', '\u{2207}', '\u{038a}', '\u{038c}', '\u{038e}',
    '\u{038f}', '`', ':', '#', '@', '\'', '=', '"',
    '\u{0385}', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{03b1}', '\u{03b2}', '\u{03b3}', '\u{03b4}', '\u{03b5}', '\u{03b6}',
    '\u{00b0}', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', '\u{03b7}', '\u{03b8}', '\u{03b9}', '\u{03ba}', '\u{03bb}', '\u{03bc}',
    '\u{00b4}', '~', 's', 't', 'u', 'v', 'w', 'x', // 0xa0
    'y', 'z', '\u{03bd}', '\u{03be}', '\u{03bf}', '\u{03c0}', '\u{03c1}', '\u{03c3}',
    '\u{00a3}', '\u{03ac}', '\u{03ad}', '\u{03ae}', '\u{03ca}', '\u{03af}', '\u{03cc}', '\u{03cd}',
    '\u{03cb}', '\u{03ce}', '\u{03c2}', '\u{03c4}', '\u{03c5}', '\u{03c6}', '\u{03c7}', '\u{03c8}',
    '{', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xc0
    'H', 'I', '\u{00ad}', '\u{03c9}', '\u{0390}', '\u{03b0}', '\u{2018}', '\u{2015}',
    '}', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
    'Q', 'R', '\u{00b1}', '\u{00bd}', '\u{fffd}', '\u{00b7}', '\u{2019}', '\u{00a6}',
    '\\', '\u{fffd}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xe0
    'Y', 'Z', '\u{00b2}', '\u{00a7}', '\u{fffd}', '\u{fffd}', '\u{00ab}', '\u{00ac}',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', '\u{00b3}', '\u{00a9}', '\u{fffd}', '\u{fffd}', '\u{00bb}', '\u{009f}',
];

pub(super) const CP1025: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}', // 0x00
    '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}', // 0x20
    '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
    ' ', '\u{00a0}', '\u{0452}', '\u{0453}', '\u{0451}', '\u{0454}', '\u{0455}', '\u{0456}', // 0x40
    '\u{0457}', '\u{0458}', '[', '.', '<', '(', '+', '!',
    '&', '\u{0459}', '\u{045a}', '\u{045b}', '\u{045c}', '\u{045e}', '\u{045f}', '\u{042a}',
    '\u{2116}', '\u{0402}', ']', '$', '*', ')', ';', '^',
    '-', '/', '\u{0403}', '\u{0401}', '\u{0404}', '\u{0405}', '\u{0406}', '\u{0407}', // 0x60
    '\u{0408}', '\u{0409}', '|', ',', '%', '_', '>', '?',
    '\u{040a}', '\u{040b}', '\u{040c}', '\u{00ad}', '\u{040e}', '\u{040f}', '\u{044e}', '\u{0430}',
    '\u{0431}', '`', ':', '#', '@', '\'', '=', '"',
    '\u{0446}', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{0434}', '\u{0435}', '\u{0444}', '\u{0433}', '\u{0445}', '\u{0438}',
    '\u{0439}', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', '\u{043a}', '\u{043b}', '\u{043c}', '\u{043d}', '\u{043e}', '\u{043f}',
    '\u{044f}', '~', 's', 't', 'u', 'v', 'w', 'x', // 0xa0
    'y', 'z', '\u{0440}', '\u{0441}', '\u{0442}', '\u{0443}', '\u{0436}', '\u{0432}',
    '\u{044c}', '\u{044b}', '\u{0437}', '\u{0448}', '\u{044d}', '\u{0449}', '\u{0447}', '\u{044a}',
    '\u{042e}', '\u{0410}', '\u{0411}', '\u{0426}', '\u{0414}', '\u{0415}', '\u{0424}', '\u{0413}',
    '{', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xc0
    'H', 'I', '\u{0425}', '\u{0418}', '\u{0419}', '\u{041a}', '\u{041b}', '\u{041c}',
    '}', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
    'Q', 'R', '\u{041d}', '\u{041e}', '\u{041f}', '\u{042f}', '\u{0420}', '\u{0421}',
    '\\', '\u{00a7}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xe0
    'Y', 'Z', '\u{0422}', '\u{0423}', '\u{0416}', '\u{0412}', '\u{042c}', '\u{042b}',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', '\u{0417}', '\u{0428}', '\u{042d}', '\u{0429}', '\u{0427}', '\u{009f}',
];

pub(super) const CP1026: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}', // 0x00
    '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}', // 0x20
    '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
    ' ', '\u{00a0}', '\u{00e2}', '\u{00e4}', '\u{00e0}', '\u{00e1}', '\u{00e3}', '\u{00e5}', // 0x40
    '{', '\u{00f1}', '\u{00c7}', '.', '<', '(', '+', '!',
    '&', '\u{00e9}', '\u{00ea}', '\u{00eb}', '\u{00e8}', '\u{00ed}', '\u{00ee}', '\u{00ef}',
    '\u{00ec}', '\u{00df}', '\u{011e}', '\u{0130}', '*', ')', ';', '^',
    '-', '/', '\u{00c2}', '\u{00c4}', '\u{00c0}', '\u{00c1}', '\u{00c3}', '\u{00c5}', // 0x60
    '[', '\u{00d1}', '\u{015f}', ',', '%', '_', '>', '?',
    '\u{00f8}', '\u{00c9}', '\u{00ca}', '\u{00cb}', '\u{00c8}', '\u{00cd}', '\u{00ce}', '\u{00cf}',
    '\u{00cc}', '\u{0131}', ':', '\u{00d6}', '\u{015e}', '\'', '=', '\u{00dc}',
    '\u{00d8}', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{00ab}', '\u{00bb}', '}', '`', '\u{00a6}', '\u{00b1}',
    '\u{00b0}', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', '\u{00aa}', '\u{00ba}', '\u{00e6}', '\u{02db}', '\u{00c6}', '\u{00a4}',
    '\u{00b5}', '\u{00f6}', 's', 't', 'u', 'v', 'w', 'x', // 0xa0
    'y', 'z', '\u{00a1}', '\u{00bf}', ']', '$', '@', '\u{00ae}',
    '\u{00a2}', '\u{00a3}', '\u{00a5}', '\u{00b7}', '\u{00a9}', '\u{00a7}', '\u{00b6}', '\u{00bc}',
    '\u{00bd}', '\u{00be}', '\u{00ac}', '|', '\u{2014}', '\u{00a8}', '\u{00b4}', '\u{00d7}',
    '\u{00e7}', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xc0
    'H', 'I', '\u{00ad}', '\u{00f4}', '~', '\u{00f2}', '\u{00f3}', '\u{00f5}',
    '\u{011f}', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
    'Q', 'R', '\u{00b9}', '\u{00fb}', '\\', '\u{00f9}', '\u{00fa}', '\u{00ff}',
    '\u{00fc}', '\u{00f7}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xe0
    'Y', 'Z', '\u{00b2}', '\u{00d4}', '#', '\u{00d2}', '\u{00d3}', '\u{00d5}',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', '\u{00b3}', '\u{00db}', '"', '\u{00d9}', '\u{00da}', '\u{009f}',
];

pub(super) const CP1047: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}', // 0x00
    '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}', // 0x20
    '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
    ' ', '\u{00a0}', '\u{00e2}', '\u{00e4}', '\u{00e0}', '\u{00e1}', '\u{00e3}', '\u{00e5}', // 0x40
    '\u{00e7}', '\u{00f1}', '\u{00a2}', '.', '<', '(', '+', '|',
    '&', '\u{00e9}', '\u{00ea}', '\u{00eb}', '\u{00e8}', '\u{00ed}', '\u{00ee}', '\u{00ef}',
    '\u{00ec}', '\u{00df}', '!', '$', '*', ')', ';', '^',
    '-', '/', '\u{00c2}', '\u{00c4}', '\u{00c0}', '\u{00c1}', '\u{00c3}', '\u{00c5}', // 0x60
    '\u{00c7}', '\u{00d1}', '\u{00a6}', ',', '%', '_', '>', '?',
    '\u{00f8}', '\u{00c9}', '\u{00ca}', '\u{00cb}', '\u{00c8}', '\u{00cd}', '\u{00ce}', '\u{00cf}',
    '\u{00cc}', '`', ':', '#', '@', '\'', '=', '"',
    '\u{00d8}', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{00ab}', '\u{00bb}', '\u{00f0}', '\u{00fd}', '\u{00fe}', '\u{00b1}',
    '\u{00b0}', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', '\u{00aa}', '\u{00ba}', '\u{00e6}', '\u{00b8}', '\u{00c6}', '\u{00a4}',
    '\u{00b5}', '~', 's', 't', 'u', 'v', 'w', 'x', // 0xa0
    'y', 'z', '\u{00a1}', '\u{00bf}', '\u{00d0}', '[', '\u{00de}', '\u{00ae}',
    '\u{00ac}', '\u{00a3}', '\u{00a5}', '\u{00b7}', '\u{00a9}', '\u{00a7}', '\u{00b6}', '\u{00bc}',
    '\u{00bd}', '\u{00be}', '\u{00dd}', '\u{00a8}', '\u{00af}', ']', '\u{00b4}', '\u{00d7}',
    '{', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xc0
    'H', 'I', '\u{00ad}', '\u{00f4}', '\u{00f6}', '\u{00f2}', '\u{00f3}', '\u{00f5}',
    '}', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
    'Q', 'R', '\u{00b9}', '\u{00fb}', '\u{00fc}', '\u{00f9}', '\u{00fa}', '\u{00ff}',
    '\\', '\u{00f7}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xe0
    'Y', 'Z', '\u{00b2}', '\u{00d4}', '\u{00d6}', '\u{00d2}', '\u{00d3}', '\u{00d5}',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', '\u{00b3}', '\u{00db}', '\u{00dc}', '\u{00d9}', '\u{00da}', '\u{009f}',
];

pub(super) const CP1140: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}', // 0x00
    '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}', // 0x20
    '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
    ' ', '\u{00a0}', '\u{00e2}', '\u{00e4}', '\u{00e0}', '\u{00e1}', '\u{00e3}', '\u{00e5}', // 0x40
    '\u{00e7}', '\u{00f1}', '\u{00a2}', '.', '<', '(', '+', '|',
    '&', '\u{00e9}', '\u{00ea}', '\u{00eb}', '\u{00e8}', '\u{00ed}', '\u{00ee}', '\u{00ef}',
    '\u{00ec}', '\u{00df}', '!', '$', '*', ')', ';', '\u{00ac}',
    '-', '/', '\u{00c2}', '\u{00c4}', '\u{00c0}', '\u{00c1}', '\u{00c3}', '\u{00c5}', // 0x60
    '\u{00c7}', '\u{00d1}', '\u{00a6}', ',', '%', '_', '>', '?',
    '\u{00f8}', '\u{00c9}', '\u{00ca}', '\u{00cb}', '\u{00c8}', '\u{00cd}', '\u{00ce}', '\u{00cf}',
    '\u{00cc}', '`', ':', '#', '@', '\'', '=', '"',
    '\u{00d8}', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{00ab}', '\u{00bb}', '\u{00f0}', '\u{00fd}', '\u{00fe}', '\u{00b1}',
    '\u{00b0}', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', '\u{00aa}', '\u{00ba}', '\u{00e6}', '\u{00b8}', '\u{00c6}', '\u{20ac}',
    '\u{00b5}', '~', 's', 't', 'u', 'v', 'w', 'x', // 0xa0
    'y', 'z', '\u{00a1}', '\u{00bf}', '\u{00d0}', '\u{00dd}', '\u{00de}', '\u{00ae}',
    '^', '\u{00a3}', '\u{00a5}', '\u{00b7}', '\u{00a9}', '\u{00a7}', '\u{00b6}', '\u{00bc}',
    '\u{00bd}', '\u{00be}', '[', ']', '\u{00af}', '\u{00a8}', '\u{00b4}', '\u{00d7}',
    '{', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xc0
    'H', 'I', '\u{00ad}', '\u{00f4}', '\u{00f6}', '\u{00f2}', '\u{00f3}', '\u{00f5}',
    '}', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
    'Q', 'R', '\u{00b9}', '\u{00fb}', '\u{00fc}', '\u{00f9}', '\u{00fa}', '\u{00ff}',
    '\\', '\u{00f7}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xe0
    'Y', 'Z', '\u{00b2}', '\u{00d4}', '\u{00d6}', '\u{00d2}', '\u{00d3}', '\u{00d5}',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', '\u{00b3}', '\u{00db}', '\u{00dc}', '\u{00d9}', '\u{00da}', '\u{009f}',
];

pub(super) const CP1141: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}', // 0x00
    '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}', // 0x20
    '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
    ' ', '\u{00a0}', '\u{00e2}', '{', '\u{00e0}', '\u{00e1}', '\u{00e3}', '\u{00e5}', // 0x40
    '\u{00e7}', '\u{00f1}', '\u{00c4}', '.', '<', '(', '+', '!',
    '&', '\u{00e9}', '\u{00ea}', '\u{00eb}', '\u{00e8}', '\u{00ed}', '\u{00ee}', '\u{00ef}',
    '\u{00ec}', '~', '\u{00dc}', '$', '*', ')', ';', '^',
    '-', '/', '\u{00c2}', '[', '\u{00c0}', '\u{00c1}', '\u{00c3}', '\u{00c5}', // 0x60
    '\u{00c7}', '\u{00d1}', '\u{00f6}', ',', '%', '_', '>', '?',
    '\u{00f8}', '\u{00c9}', '\u{00ca}', '\u{00cb}', '\u{00c8}', '\u{00cd}', '\u{00ce}', '\u{00cf}',
    '\u{00cc}', '`', ':', '#', '\u{00a7}', '\'', '=', '"',
    '\u{00d8}', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{00ab}', '\u{00bb}', '\u{00f0}', '\u{00fd}', '\u{00fe}', '\u{00b1}',
    '\u{00b0}', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', '\u{00aa}', '\u{00ba}', '\u{00e6}', '\u{00b8}', '\u{00c6}', '\u{20ac}',
    '\u{00b5}', '\u{00df}', 's', 't', 'u', 'v', 'w', 'x', // 0xa0
    'y', 'z', '\u{00a1}', '\u{00bf}', '\u{00d0}', '\u{00dd}', '\u{00de}', '\u{00ae}',
    '\u{00a2}', '\u{00a3}', '\u{00a5}', '\u{00b7}', '\u{00a9}', '@', '\u{00b6}', '\u{00bc}',
    '\u{00bd}', '\u{00be}', '\u{00ac}', '|', '\u{00af}', '\u{00a8}', '\u{00b4}', '\u{00d7}',
    '\u{00e4}', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xc0
    'H', 'I', '\u{00ad}', '\u{00f4}', '\u{00a6}', '\u{00f2}', '\u{00f3}', '\u{00f5}',
    '\u{00fc}', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
    'Q', 'R', '\u{00b9}', '\u{00fb}', '}', '\u{00f9}', '\u{00fa}', '\u{00ff}',
    '\u{00d6}', '\u{00f7}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xe0
    'Y', 'Z', '\u{00b2}', '\u{00d4}', '\\', '\u{00d2}', '\u{00d3}', '\u{00d5}',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', '\u{00b3}', '\u{00db}', ']', '\u{00d9}', '\u{00da}', '\u{009f}',
];

pub(super) const CP1142: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}', // 0x00
    '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}', // 0x20
    '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
    ' ', '\u{00a0}', '\u{00e2}', '\u{00e4}', '\u{00e0}', '\u{00e1}', '\u{00e3}', '}', // 0x40
    '\u{00e7}', '\u{00f1}', '#', '.', '<', '(', '+', '!',
    '&', '\u{00e9}', '\u{00ea}', '\u{00eb}', '\u{00e8}', '\u{00ed}', '\u{00ee}', '\u{00ef}',
    '\u{00ec}', '\u{00df}', '\u{20ac}', '\u{00c5}', '*', ')', ';', '^',
    '-', '/', '\u{00c2}', '\u{00c4}', '\u{00c0}', '\u{00c1}', '\u{00c3}', '$', // 0x60
    '\u{00c7}', '\u{00d1}', '\u{00f8}', ',', '%', '_', '>', '?',
    '\u{00a6}', '\u{00c9}', '\u{00ca}', '\u{00cb}', '\u{00c8}', '\u{00cd}', '\u{00ce}', '\u{00cf}',
    '\u{00cc}', '`', ':', '\u{00c6}', '\u{00d8}', '\'', '=', '"',
    '@', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{00ab}', '\u{00bb}', '\u{00f0}', '\u{00fd}', '\u{00fe}', '\u{00b1}',
    '\u{00b0}', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', '\u{00aa}', '\u{00ba}', '{', '\u{00b8}', '[', ']',
    '\u{00b5}', '\u{00fc}', 's', 't', 'u', 'v', 'w', 'x', // 0xa0
    'y', 'z', '\u{00a1}', '\u{00bf}', '\u{00d0}', '\u{00dd}', '\u{00de}', '\u{00ae}',
    '\u{00a2}', '\u{00a3}', '\u{00a5}', '\u{00b7}', '\u{00a9}', '\u{00a7}', '\u{00b6}', '\u{00bc}',
    '\u{00bd}', '\u{00be}', '\u{00ac}', '|', '\u{00af}', '\u{00a8}', '\u{00b4}', '\u{00d7}',
    '\u{00e6}', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xc0
    'H', 'I', '\u{00ad}', '\u{00f4}', '\u{00f6}', '\u{00f2}', '\u{00f3}', '\u{00f5}',
    '\u{00e5}', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
    'Q', 'R', '\u{00b9}', '\u{00fb}', '~', '\u{00f9}', '\u{00fa}', '\u{00ff}',
    '\\', '\u{00f7}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xe0
    'Y', 'Z', '\u{00b2}', '\u{00d4}', '\u{00d6}', '\u{00d2}', '\u{00d3}', '\u{00d5}',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', '\u{00b3}', '\u{00db}', '\u{00dc}', '\u{00d9}', '\u{00da}', '\u{009f}',
];

pub(super) const CP1143: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}', // 0x00
    '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}', // 0x20
    '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
    ' ', '\u{00a0}', '\u{00e2}', '{', '\u{00e0}', '\u{00e1}', '\u{00e3}', '}', // 0x40
    '\u{00e7}', '\u{00f1}', '\u{00a7}', '.', '<', '(', '+', '!',
    '&', '`', '\u{00ea}', '\u{00eb}', '\u{00e8}', '\u{00ed}', '\u{00ee}', '\u{00ef}',
    '\u{00ec}', '\u{00df}', '\u{20ac}', '\u{00c5}', '*', ')', ';', '^',
    '-', '/', '\u{00c2}', '#', '\u{00c0}', '\u{00c1}', '\u{00c3}', '$', // 0x60
    '\u{00c7}', '\u{00d1}', '\u{00f6}', ',', '%', '_', '>', '?',
    '\u{00f8}', '\\', '\u{00ca}', '\u{00cb}', '\u{00c8}', '\u{00cd}', '\u{00ce}', '\u{00cf}',
    '\u{00cc}', '\u{00e9}', ':', '\u{00c4}', '\u{00d6}', '\'', '=', '"',
    '\u{00d8}', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{00ab}', '\u{00bb}', '\u{00f0}', '\u{00fd}', '\u{00fe}', '\u{00b1}',
    '\u{00b0}', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', '\u{00aa}', '\u{00ba}', '\u{00e6}', '\u{00b8}', '\u{00c6}', ']',
    '\u{00b5}', '\u{00fc}', 's', 't', 'u', 'v', 'w', 'x', // 0xa0
    'y', 'z', '\u{00a1}', '\u{00bf}', '\u{00d0}', '\u{00dd}', '\u{00de}', '\u{00ae}',
    '\u{00a2}', '\u{00a3}', '\u{00a5}', '\u{00b7}', '\u{00a9}', '[', '\u{00b6}', '\u{00bc}',
    '\u{00bd}', '\u{00be}', '\u{00ac}', '|', '\u{00af}', '\u{00a8}', '\u{00b4}', '\u{00d7}',
    '\u{00e4}', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xc0
    'H', 'I', '\u{00ad}', '\u{00f4}', '\u{00a6}', '\u{00f2}', '\u{00f3}', '\u{00f5}',
    '\u{00e5}', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
    'Q', 'R', '\u{00b9}', '\u{00fb}', '~', '\u{00f9}', '\u{00fa}', '\u{00ff}',
    '\u{00c9}', '\u{00f7}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xe0
    'Y', 'Z', '\u{00b2}', '\u{00d4}', '@', '\u{00d2}', '\u{00d3}', '\u{00d5}',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', '\u{00b3}', '\u{00db}', '\u{00dc}', '\u{00d9}', '\u{00da}', '\u{009f}',
];

pub(super) const CP1144: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}', // 0x00
    '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}', // 0x20
    '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
    ' ', '\u{00a0}', '\u{00e2}', '\u{00e4}', '{', '\u{00e1}', '\u{00e3}', '\u{00e5}', // 0x40
    '\\', '\u{00f1}', '\u{00b0}', '.', '<', '(', '+', '!',
    '&', ']', '\u{00ea}', '\u{00eb}', '}', '\u{00ed}', '\u{00ee}', '\u{00ef}',
    '~', '\u{00df}', '\u{00e9}', '$', '*', ')', ';', '^',
    '-', '/', '\u{00c2}', '\u{00c4}', '\u{00c0}', '\u{00c1}', '\u{00c3}', '\u{00c5}', // 0x60
    '\u{00c7}', '\u{00d1}', '\u{00f2}', ',', '%', '_', '>', '?',
    '\u{00f8}', '\u{00c9}', '\u{00ca}', '\u{00cb}', '\u{00c8}', '\u{00cd}', '\u{00ce}', '\u{00cf}',
    '\u{00cc}', '\u{00f9}', ':', '\u{00a3}', '\u{00a7}', '\'', '=', '"',
    '\u{00d8}', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{00ab}', '\u{00bb}', '\u{00f0}', '\u{00fd}', '\u{00fe}', '\u{00b1}',
    '[', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', '\u{00aa}', '\u{00ba}', '\u{00e6}', '\u{00b8}', '\u{00c6}', '\u{20ac}',
    '\u{00b5}', '\u{00ec}', 's', 't', 'u', 'v', 'w', 'x', // 0xa0
    'y', 'z', '\u{00a1}', '\u{00bf}', '\u{00d0}', '\u{00dd}', '\u{00de}', '\u{00ae}',
    '\u{00a2}', '#', '\u{00a5}', '\u{00b7}', '\u{00a9}', '@', '\u{00b6}', '\u{00bc}',
    '\u{00bd}', '\u{00be}', '\u{00ac}', '|', '\u{00af}', '\u{00a8}', '\u{00b4}', '\u{00d7}',
    '\u{00e0}', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xc0
    'H', 'I', '\u{00ad}', '\u{00f4}', '\u{00f6}', '\u{00a6}', '\u{00f3}', '\u{00f5}',
    '\u{00e8}', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
    'Q', 'R', '\u{00b9}', '\u{00fb}', '\u{00fc}', '`', '\u{00fa}', '\u{00ff}',
    '\u{00e7}', '\u{00f7}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xe0
    'Y', 'Z', '\u{00b2}', '\u{00d4}', '\u{00d6}', '\u{00d2}', '\u{00d3}', '\u{00d5}',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', '\u{00b3}', '\u{00db}', '\u{00dc}', '\u{00d9}', '\u{00da}', '\u{009f}',
];

pub(super) const CP1145: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}', // 0x00
    '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}', // 0x20
    '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
    ' ', '\u{00a0}', '\u{00e2}', '\u{00e4}', '\u{00e0}', '\u{00e1}', '\u{00e3}', '\u{00e5}', // 0x40
    '\u{00e7}', '\u{00a6}', '[', '.', '<', '(', '+', '|',
    '&', '\u{00e9}', '\u{00ea}', '\u{00eb}', '\u{00e8}', '\u{00ed}', '\u{00ee}', '\u{00ef}',
    '\u{00ec}', '\u{00df}', ']', '$', '*', ')', ';', '\u{00ac}',
    '-', '/', '\u{00c2}', '\u{00c4}', '\u{00c0}', '\u{00c1}', '\u{00c3}', '\u{00c5}', // 0x60
    '\u{00c7}', '#', '\u{00f1}', ',', '%', '_', '>', '?',
    '\u{00f8}', '\u{00c9}', '\u{00ca}', '\u{00cb}', '\u{00c8}', '\u{00cd}', '\u{00ce}', '\u{00cf}',
    '\u{00cc}', '`', ':', '\u{00d1}', '@', '\'', '=', '"',
    '\u{00d8}', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{00ab}', '\u{00bb}', '\u{00f0}', '\u{00fd}', '\u{00fe}', '\u{00b1}',
    '\u{00b0}', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', '\u{00aa}', '\u{00ba}', '\u{00e6}', '\u{00b8}', '\u{00c6}', '\u{20ac}',
    '\u{00b5}', '\u{00a8}', 's', 't', 'u', 'v', 'w', 'x', // 0xa0
    'y', 'z', '\u{00a1}', '\u{00bf}', '\u{00d0}', '\u{00dd}', '\u{00de}', '\u{00ae}',
    '\u{00a2}', '\u{00a3}', '\u{00a5}', '\u{00b7}', '\u{00a9}', '\u{00a7}', '\u{00b6}', '\u{00bc}',
    '\u{00bd}', '\u{00be}', '^', '!', '\u{00af}', '~', '\u{00b4}', '\u{00d7}',
    '{', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xc0
    'H', 'I', '\u{00ad}', '\u{00f4}', '\u{00f6}', '\u{00f2}', '\u{00f3}', '\u{00f5}',
    '}', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
    'Q', 'R', '\u{00b9}', '\u{00fb}', '\u{00fc}', '\u{00f9}', '\u{00fa}', '\u{00ff}',
    '\\', '\u{00f7}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xe0
    'Y', 'Z', '\u{00b2}', '\u{00d4}', '\u{00d6}', '\u{00d2}', '\u{00d3}', '\u{00d5}',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', '\u{00b3}', '\u{00db}', '\u{00dc}', '\u{00d9}', '\u{00da}', '\u{009f}',
];

pub(super) const CP1146: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}', // 0x00
    '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}', // 0x20
    '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
    ' ', '\u{00a0}', '\u{00e2}', '\u{00e4}', '\u{00e0}', '\u{00e1}', '\u{00e3}', '\u{00e5}', // 0x40
    '\u{00e7}', '\u{00f1}', '$', '.', '<', '(', '+', '|',
    '&', '\u{00e9}', '\u{00ea}', '\u{00eb}', '\u{00e8}', '\u{00ed}', '\u{00ee}', '\u{00ef}',
    '\u{00ec}', '\u{00df}', '!', '\u{00a3}', '*', ')', ';', '\u{00ac}',
    '-', '/', '\u{00c2}', '\u{00c4}', '\u{00c0}', '\u{00c1}', '\u{00c3}', '\u{00c5}', // 0x60
    '\u{00c7}', '\u{00d1}', '\u{00a6}', ',', '%', '_', '>', '?',
    '\u{00f8}', '\u{00c9}', '\u{00ca}', '\u{00cb}', '\u{00c8}', '\u{00cd}', '\u{00ce}', '\u{00cf}',
    '\u{00cc}', '`', ':', '#', '@', '\'', '=', '"',
    '\u{00d8}', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{00ab}', '\u{00bb}', '\u{00f0}', '\u{00fd}', '\u{00fe}', '\u{00b1}',
    '\u{00b0}', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', '\u{00aa}', '\u{00ba}', '\u{00e6}', '\u{00b8}', '\u{00c6}', '\u{20ac}',
    '\u{00b5}', '\u{00af}', 's', 't', 'u', 'v', 'w', 'x', // 0xa0
    'y', 'z', '\u{00a1}', '\u{00bf}', '\u{00d0}', '\u{00dd}', '\u{00de}', '\u{00ae}',
    '\u{00a2}', '[', '\u{00a5}', '\u{00b7}', '\u{00a9}', '\u{00a7}', '\u{00b6}', '\u{00bc}',
    '\u{00bd}', '\u{00be}', '^', ']', '~', '\u{00a8}', '\u{00b4}', '\u{00d7}',
    '{', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xc0
    'H', 'I', '\u{00ad}', '\u{00f4}', '\u{00f6}', '\u{00f2}', '\u{00f3}', '\u{00f5}',
    '}', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
    'Q', 'R', '\u{00b9}', '\u{00fb}', '\u{00fc}', '\u{00f9}', '\u{00fa}', '\u{00ff}',
    '\\', '\u{00f7}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xe0
    'Y', 'Z', '\u{00b2}', '\u{00d4}', '\u{00d6}', '\u{00d2}', '\u{00d3}', '\u{00d5}',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', '\u{00b3}', '\u{00db}', '\u{00dc}', '\u{00d9}', '\u{00da}', '\u{009f}',
];

pub(super) const CP1147: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}', // 0x00
    '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}', // 0x20
    '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
    ' ', '\u{00a0}', '\u{00e2}', '\u{00e4}', '@', '\u{00e1}', '\u{00e3}', '\u{00e5}', // 0x40
    '\\', '\u{00f1}', '\u{00b0}', '.', '<', '(', '+', '!',
    '&', '{', '\u{00ea}', '\u{00eb}', '}', '\u{00ed}', '\u{00ee}', '\u{00ef}',
    '\u{00ec}', '\u{00df}', '\u{00a7}', '$', '*', ')', ';', '^',
    '-', '/', '\u{00c2}', '\u{00c4}', '\u{00c0}', '\u{00c1}', '\u{00c3}', '\u{00c5}', // 0x60
    '\u{00c7}', '\u{00d1}', '\u{00f9}', ',', '%', '_', '>', '?',
    '\u{00f8}', '\u{00c9}', '\u{00ca}', '\u{00cb}', '\u{00c8}', '\u{00cd}', '\u{00ce}', '\u{00cf}',
    '\u{00cc}', '\u{00b5}', ':', '\u{00a3}', '\u{00e0}', '\'', '=', '"',
    '\u{00d8}', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{00ab}', '\u{00bb}', '\u{00f0}', '\u{00fd}', '\u{00fe}', '\u{00b1}',
    '[', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', '\u{00aa}', '\u{00ba}', '\u{00e6}', '\u{00b8}', '\u{00c6}', '\u{20ac}',
    '`', '\u{00a8}', 's', 't', 'u', 'v', 'w', 'x', // 0xa0
    'y', 'z', '\u{00a1}', '\u{00bf}', '\u{00d0}', '\u{00dd}', '\u{00de}', '\u{00ae}',
    '\u{00a2}', '#', '\u{00a5}', '\u{00b7}', '\u{00a9}', ']', '\u{00b6}', '\u{00bc}',
    '\u{00bd}', '\u{00be}', '\u{00ac}', '|', '\u{00af}', '~', '\u{00b4}', '\u{00d7}',
    '\u{00e9}', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xc0
    'H', 'I', '\u{00ad}', '\u{00f4}', '\u{00f6}', '\u{00f2}', '\u{00f3}', '\u{00f5}',
    '\u{00e8}', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
    'Q', 'R', '\u{00b9}', '\u{00fb}', '\u{00fc}', '\u{00a6}', '\u{00fa}', '\u{00ff}',
    '\u{00e7}', '\u{00f7}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xe0
    'Y', 'Z', '\u{00b2}', '\u{00d4}', '\u{00d6}', '\u{00d2}', '\u{00d3}', '\u{00d5}',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', '\u{00b3}', '\u{00db}', '\u{00dc}', '\u{00d9}', '\u{00da}', '\u{009f}',
];

pub(super) const CP1148: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}', // 0x00
    '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}', // 0x20
    '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
    ' ', '\u{00a0}', '\u{00e2}', '\u{00e4}', '\u{00e0}', '\u{00e1}', '\u{00e3}', '\u{00e5}', // 0x40
    '\u{00e7}', '\u{00f1}', '[', '.', '<', '(', '+', '!',
    '&', '\u{00e9}', '\u{00ea}', '\u{00eb}', '\u{00e8}', '\u{00ed}', '\u{00ee}', '\u{00ef}',
    '\u{00ec}', '\u{00df}', ']', '$', '*', ')', ';', '^',
    '-', '/', '\u{00c2}', '\u{00c4}', '\u{00c0}', '\u{00c1}', '\u{00c3}', '\u{00c5}', // 0x60
    '\u{00c7}', '\u{00d1}', '\u{00a6}', ',', '%', '_', '>', '?',
    '\u{00f8}', '\u{00c9}', '\u{00ca}', '\u{00cb}', '\u{00c8}', '\u{00cd}', '\u{00ce}', '\u{00cf}',
    '\u{00cc}', '`', ':', '#', '@', '\'', '=', '"',
    '\u{00d8}', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{00ab}', '\u{00bb}', '\u{00f0}', '\u{00fd}', '\u{00fe}', '\u{00b1}',
    '\u{00b0}', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', '\u{00aa}', '\u{00ba}', '\u{00e6}', '\u{00b8}', '\u{00c6}', '\u{20ac}',
    '\u{00b5}', '~', 's', 't', 'u', 'v', 'w', 'x', // 0xa0
    'y', 'z', '\u{00a1}', '\u{00bf}', '\u{00d0}', '\u{00dd}', '\u{00de}', '\u{00ae}',
    '\u{00a2}', '\u{00a3}', '\u{00a5}', '\u{00b7}', '\u{00a9}', '\u{00a7}', '\u{00b6}', '\u{00bc}',
    '\u{00bd}', '\u{00be}', '\u{00ac}', '|', '\u{00af}', '\u{00a8}', '\u{00b4}', '\u{00d7}',
    '{', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xc0
    'H', 'I', '\u{00ad}', '\u{00f4}', '\u{00f6}', '\u{00f2}', '\u{00f3}', '\u{00f5}',
    '}', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
    'Q', 'R', '\u{00b9}', '\u{00fb}', '\u{00fc}', '\u{00f9}', '\u{00fa}', '\u{00ff}',
    '\\', '\u{00f7}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xe0
    'Y', 'Z', '\u{00b2}', '\u{00d4}', '\u{00d6}', '\u{00d2}', '\u{00d3}', '\u{00d5}',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', '\u{00b3}', '\u{00db}', '\u{00dc}', '\u{00d9}', '\u{00da}', '\u{009f}',
];

pub(super) const CP1149: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}', // 0x00
    '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}', // 0x20
    '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
    ' ', '\u{00a0}', '\u{00e2}', '\u{00e4}', '\u{00e0}', '\u{00e1}', '\u{00e3}', '\u{00e5}', // 0x40
    '\u{00e7}', '\u{00f1}', '\u{00de}', '.', '<', '(', '+', '!',
    '&', '\u{00e9}', '\u{00ea}', '\u{00eb}', '\u{00e8}', '\u{00ed}', '\u{00ee}', '\u{00ef}',
    '\u{00ec}', '\u{00df}', '\u{00c6}', '$', '*', ')', ';', '\u{00d6}',
    '-', '/', '\u{00c2}', '\u{00c4}', '\u{00c0}', '\u{00c1}', '\u{00c3}', '\u{00c5}', // 0x60
    '\u{00c7}', '\u{00d1}', '\u{00a6}', ',', '%', '_', '>', '?',
    '\u{00f8}', '\u{00c9}', '\u{00ca}', '\u{00cb}', '\u{00c8}', '\u{00cd}', '\u{00ce}', '\u{00cf}',
    '\u{00cc}', '\u{00f0}', ':', '#', '\u{00d0}', '\'', '=', '"',
    '\u{00d8}', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{00ab}', '\u{00bb}', '`', '\u{00fd}', '{', '\u{00b1}',
    '\u{00b0}', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', '\u{00aa}', '\u{00ba}', '}', '\u{00b8}', ']', '\u{20ac}',
    '\u{00b5}', '\u{00f6}', 's', 't', 'u', 'v', 'w', 'x', // 0xa0
    'y', 'z', '\u{00a1}', '\u{00bf}', '@', '\u{00dd}', '[', '\u{00ae}',
    '\u{00a2}', '\u{00a3}', '\u{00a5}', '\u{00b7}', '\u{00a9}', '\u{00a7}', '\u{00b6}', '\u{00bc}',
    '\u{00bd}', '\u{00be}', '\u{00ac}', '|', '\u{00af}', '\u{00a8}', '\\', '\u{00d7}',
    '\u{00fe}', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xc0
    'H', 'I', '\u{00ad}', '\u{00f4}', '~', '\u{00f2}', '\u{00f3}', '\u{00f5}',
    '\u{00e6}', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
    'Q', 'R', '\u{00b9}', '\u{00fb}', '\u{00fc}', '\u{00f9}', '\u{00fa}', '\u{00ff}',
    '\u{00b4}', '\u{00f7}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xe0
    'Y', 'Z', '\u{00b2}', '\u{00d4}', '^', '\u{00d2}', '\u{00d3}', '\u{00d5}',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', '\u{00b3}', '\u{00db}', '\u{00dc}', '\u{00d9}', '\u{00da}', '\u{009f}',
];

pub(super) const CP1153: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{009c}', '\u{0009}', '\u{0086}', '\u{007f}', // 0x00
    '\u{0097}', '\u{008d}', '\u{008e}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{000e}', '\u{000f}',
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', '\u{009d}', '\u{0085}', '\u{0008}', '\u{0087}',
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008f}', '\u{001c}', '\u{001d}', '\u{001e}', '\u{001f}',
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{000a}', '\u{0017}', '\u{001b}', // 0x20
    '\u{0088}', '\u{0089}', '\u{008a}', '\u{008b}', '\u{008c}', '\u{0005}', '\u{0006}', '\u{0007}',
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}',
    '\u{0098}', '\u{0099}', '\u{009a}', '\u{009b}', '\u{0014}', '\u{0015}', '\u{009e}', '\u{001a}',
    ' ', '\u{00a0}', '\u{00e2}', '\u{00e4}', '\u{0163}', '\u{00e1}', '\u{0103}', '\u{010d}', // 0x40
    '\u{00e7}', '\u{0107}', '[', '.', '<', '(', '+', '!',
    '&', '\u{00e9}', '\u{0119}', '\u{00eb}', '\u{016f}', '\u{00ed}', '\u{00ee}', '\u{013e}',
    '\u{013a}', '\u{00df}', ']', '$', '*', ')', ';', '^',
    '-', '/', '\u{00c2}', '\u{00c4}', '\u{02dd}', '\u{00c1}', '\u{0102}', '\u{010c}', // 0x60
    '\u{00c7}', '\u{0106}', '|', ',', '%', '_', '>', '?',
    '\u{02c7}', '\u{00c9}', '\u{0118}', '\u{00cb}', '\u{016e}', '\u{00cd}', '\u{00ce}', '\u{013d}',
    '\u{0139}', '`', ':', '#', '@', '\'', '=', '"',
    '\u{02d8}', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{015b}', '\u{0148}', '\u{0111}', '\u{00fd}', '\u{0159}', '\u{015f}',
    '\u{00b0}', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', '\u{0142}', '\u{0144}', '\u{0161}', '\u{00b8}', '\u{02db}', '\u{20ac}',
    '\u{0105}', '~', 's', 't', 'u', 'v', 'w', 'x', // 0xa0
    'y', 'z', '\u{015a}', '\u{0147}', '\u{0110}', '\u{00dd}', '\u{0158}', '\u{015e}',
    '\u{02d9}', '\u{0104}', '\u{017c}', '\u{0162}', '\u{017b}', '\u{00a7}', '\u{017e}', '\u{017a}',
    '\u{017d}', '\u{0179}', '\u{0141}', '\u{0143}', '\u{0160}', '\u{00a8}', '\u{00b4}', '\u{00d7}',
    '{', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xc0
    'H', 'I', '\u{00ad}', '\u{00f4}', '\u{00f6}', '\u{0155}', '\u{00f3}', '\u{0151}',
    '}', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
    'Q', 'R', '\u{011a}', '\u{0171}', '\u{00fc}', '\u{0165}', '\u{00fa}', '\u{011b}',
    '\\', '\u{00f7}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xe0
    'Y', 'Z', '\u{010f}', '\u{00d4}', '\u{00d6}', '\u{0154}', '\u{00d3}', '\u{0150}',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', '\u{010e}', '\u{0170}', '\u{00dc}', '\u{0164}', '\u{00da}', '\u{009f}',
];

