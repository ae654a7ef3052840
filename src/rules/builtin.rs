//! The compiled-in rule table.
//!
//! Trees are tried in the order they appear. Cheap, highly selective tests
//! come first; content heuristics for scripts and markup come last so that
//! binary formats with a textual preamble are not mistaken for text.

use super::build::*;
use super::{RuleNode, RuleSet};
use crate::matchers::{IndirectKind, NumericEntry, RegexFlags, StringEntry, StringFlags};
use crate::rule;

const NO_FLAGS: StringFlags = StringFlags::empty();
const COMPACT: StringFlags = StringFlags::COMPACT_WS;
const IGNORE: StringFlags = StringFlags::IGNORE_WS;
const LOWER: StringFlags = StringFlags::MATCH_LOWER;
const COMPACT_LOWER: StringFlags = StringFlags::COMPACT_WS.union(StringFlags::MATCH_LOWER);
const IGNORE_LOWER: StringFlags = StringFlags::IGNORE_WS.union(StringFlags::MATCH_LOWER);

const PLAIN: RegexFlags = RegexFlags::empty();
const NO_CASE: RegexFlags = RegexFlags::NO_CASE;
const BEGIN: RegexFlags = RegexFlags::BEGIN;

/// Big-endian shorts at offset 0.
static LEADING_SHORTS: &[NumericEntry] = &[
    entry(0xFFFC, 0xFFFE, "audio/mpeg"),
    entry(0xFFF2, 0xFFFE, "audio/mpeg"),
    entry(0xFFF4, 0xFFFE, "audio/mpeg"),
    entry(0xFFF6, 0xFFFE, "audio/mpeg"),
    entry(0xFFE2, 0xFFFE, "audio/mpeg"),
    entry(0xFFF0, 0xFFF6, "audio/x-hx-aac-adts"),
    entry(0x56E0, 0xFFE0, "audio/x-mp4a-latm"),
    entry(0x0b77, 0xFFFF, "audio/vnd.dolby.dd-raw"),
    entry(0x8502, 0xFFFF, "text/PGP"),
    entry(0x55AA, 0xFFFF, "application/octet-stream"),
    entry(0x9900, 0xFFFF, "application/x-pgp-keyring"),
    entry(0x9501, 0xFFFF, "application/x-pgp-keyring"),
    entry(0x9500, 0xFFFF, "application/x-pgp-keyring"),
    entry(0xa600, 0xFFFF, "text/PGP"),
];

/// Literal prefixes at offset 0, sorted by first byte.
static PREFIXES: &[StringEntry<'static>] = &[
    prefix(b"\x04%!", "application/postscript"),
    prefix(
        b"\x06\x0e+4\x02\x05\x01\x01\r\x01\x02\x01\x01\x02",
        "application/mxf",
    ),
    prefix(b"\t\x04\x06\x00\x00\x00\x10\x00", "application/vnd.ms-excel"),
    prefix(b"\n%PDF-", "application/pdf"),
    prefix(b"\x1f\x1e", "application/octet-stream"),
    prefix(b"# KDE Config File", "application/x-kdelnk"),
    prefix(b"# PaCkAgE DaTaStReAm", "application/x-svr4-package"),
    prefix(b"# abook addressbook file", "application/x-abook-addressbook"),
    prefix(b"# xmcd", "text/x-xmcd"),
    prefix(b"#! /usr/bin/env perl", "text/x-perl"),
    prefix(b"#!/usr/bin/env perl", "text/x-perl"),
    prefix(b"%!", "application/postscript"),
    prefix(b"%FDF-", "application/vnd.fdf"),
    prefix(b"%PDF-", "application/pdf"),
    prefix(b"-----BEGIN PGP MESSAGE-", "application/pgp"),
    prefix(b"-----BEGIN PGP SIGNATURE-", "application/pgp-signature"),
    prefix(b".RMF\x00\x00\x00", "application/vnd.rn-realmedia"),
    prefix(b"8BPS", "image/vnd.adobe.photoshop"),
    prefix(b"<?xml version \"", "text/xml"),
    prefix(b"<?xml version=\"", "text/xml"),
    prefix(b"<?xml version='", "text/xml"),
    prefix(b"<BookFile", "application/x-mif"),
    prefix(b"<MIFFile", "application/x-mif"),
    prefix(b"<MML", "application/x-mif"),
    prefix(b"<Maker Intermediate Print File", "application/x-mif"),
    prefix(b"<MakerFile", "application/x-mif"),
    prefix(b"<MakerScreenFont", "application/x-mif"),
    prefix(b"<SCRIBUSUTF8NEW Version", "application/x-scribus"),
    prefix(b"<svg", "image/svg"),
    prefix(b"AC1.2", "image/vnd.dwg"),
    prefix(b"AC1.3", "image/vnd.dwg"),
    prefix(b"AC1.40", "image/vnd.dwg"),
    prefix(b"AC1.50", "image/vnd.dwg"),
    prefix(b"AC1001", "image/vnd.dwg"),
    prefix(b"AC1002", "image/vnd.dwg"),
    prefix(b"AC1003", "image/vnd.dwg"),
    prefix(b"AC1004", "image/vnd.dwg"),
    prefix(b"AC1006", "image/vnd.dwg"),
    prefix(b"AC1009", "image/vnd.dwg"),
    prefix(b"AC1012", "image/vnd.dwg"),
    prefix(b"AC1014", "image/vnd.dwg"),
    prefix(b"AC1015", "image/vnd.dwg"),
    prefix(b"AC1018", "image/vnd.dwg"),
    prefix(b"AC1021", "image/vnd.dwg"),
    prefix(b"AC1024", "image/vnd.dwg"),
    prefix(b"AC1027", "image/vnd.dwg"),
    prefix(b"AC2.10", "image/vnd.dwg"),
    prefix(b"AC2.21", "image/vnd.dwg"),
    prefix(b"AC2.22", "image/vnd.dwg"),
    prefix(b"ADIF", "audio/x-hx-aac-adif"),
    prefix(b"BPG\xfb", "image/bpg"),
    prefix(b"BZh", "application/x-bzip2"),
    prefix(b"Cr24", "application/x-chrome-extension"),
    prefix(b"FLV\x01", "video/x-flv"),
    prefix(b"GDBM", "application/x-gdbm"),
    prefix(b"GIF8", "image/gif"),
    prefix(b"II\x1a\x00\x00\x00HEAPCCDR", "image/x-canon-crw"),
    prefix(b"II*\x00", "image/tiff"),
    prefix(b"II*\x00\x10\x00\x00\x00CR", "image/x-canon-cr2"),
    prefix(b"II+\x00", "image/tiff"),
    prefix(b"IIRO", "image/x-olympus-orf"),
    prefix(b"IIRS", "image/x-olympus-orf"),
    prefix(b"MAC ", "audio/x-ape"),
    prefix(b"MC0.0", "image/vnd.dwg"),
    prefix(b"MDMP", "application/x-dmp"),
    prefix(b"MM\x00*", "image/tiff"),
    prefix(b"MM\x00+", "image/tiff"),
    prefix(b"MMOR", "image/x-olympus-orf"),
    prefix(b"MP+", "audio/x-musepack"),
    prefix(b"MPCK", "audio/x-musepack"),
    prefix(b"MSCF\x00\x00\x00\x00", "application/vnd.ms-cab-compressed"),
    prefix(b"MThd", "audio/midi"),
    prefix(b"OTTO", "application/vnd.ms-opentype"),
    prefix(b"P7", "image/x-portable-pixmap"),
    prefix(b"PDN3", "image/x-paintnet"),
    prefix(b"PK\x05\x06", "application/zip"),
    prefix(b"PK\x07\x08PK\x03\x04", "application/zip"),
    prefix(b"PO^Q`", "application/msword"),
    prefix(b"RE~^", "application/x-rar"),
    prefix(b"RF64\xff\xff\xff\xffWAVEds64", "audio/x-wav"),
    prefix(b"Rar!\x1a\x07\x00", "application/x-rar"),
    prefix(b"Rar!\x1a\x07\x01\x00", "application/x-rar"),
    prefix(b"SQLite format 3", "application/x-sqlite3"),
    prefix(b"Xcur", "image/x-xcursor"),
    prefix(b"[BitmapInfo2]", "image/x-polar-monitor-bitmap"),
    prefix(b"[KDE Desktop Entry]", "application/x-kdelnk"),
    prefix(b"d13:announce-list", "application/x-bittorrent"),
    prefix(b"d8:announce", "application/x-bittorrent"),
    prefix(b"drpm", "application/x-rpm"),
    prefix(b"fLaC", "audio/x-flac"),
    prefix(b"filedesc://", "application/x-ia-arc"),
    prefix(b"gimp xcf", "image/x-xcf"),
    prefix(b"icns", "image/x-icns"),
    prefix(b"qpress10", "application/x-qpress"),
    prefix(b"tfMR", "application/x-winhelp-fts"),
    prefix(b"xar!", "application/x-xar"),
    prefix(b"{\\rtf", "text/rtf"),
    prefix(b"\x89HDF\r\n\x1a\n", "application/x-hdf"),
    prefix(b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR", "image/png"),
    prefix(b"\x8aMNG", "video/x-mng"),
    prefix(b"\x94\xa6.", "application/msword"),
    prefix(b"\xd9\xd9\xf7", "application/cbor"),
    prefix(b"\xdb\xa5-\x00", "application/msword"),
    prefix(b"\xdb\xa5-\x00\x00\x00", "application/msword"),
    prefix(b"\xf7\x02", "application/x-dvi"),
    prefix(b"\xfd7zXZ\x00", "application/x-xz"),
    prefix(b"\xff\x1f", "application/octet-stream"),
];

static CUPS_RASTER: &[StringEntry<'static>] = &[prefix(b"3", "application/vnd.cups-raster")];

/// Every builtin tree, in priority order.
pub static TREES: &[RuleNode<'static>] = &[
    RuleNode {
        test: short_group(LEADING_SHORTS),
        mime: None,
        children: &[],
    },
    rule!(be_short(0, 0xffd8) => [
        rule!(byte(2, 0xff) => "image/jpeg"),
    ]),
    rule!(byte(0, 0).gt() => [
        rule!(byte(0, 9).lt() => [
            rule!(be_long(16, 0x3030).mask(0xfe00f0f0) => [
                rule!(byte(0, 10).lt() => [
                    rule!(regex(18, "[0-9][0-9][0-9][0-9][0-9][0-9]", 0, PLAIN) => [
                        rule!(byte(0, 10).lt() => "application/x-zmachine"),
                    ]),
                ]),
            ]),
        ]),
    ]),
    rule!(be_long(0, 0x3C423FC9) => [
        rule!(be_long(4, 0x6A87C2CF) => "application/x-adrift"),
    ]),
    rule!(be_long(0, 0x00000100).mask(0xFFFFFF00) => [
        rule!(byte(3, 0xBA) => "video/mpeg"),
        rule!(byte(3, 0xB0) => "video/mpeg4-generic"),
        rule!(byte(3, 0xB5) => "video/mpeg4-generic"),
        rule!(byte(3, 0xB3) => "video/mpeg"),
    ]),
    rule!(be_short(0, 0xFFFA).mask(0xFFFE) => [
        rule!(byte(2, 0x10).mask(0xF0) => "audio/mpeg"),
        rule!(byte(2, 0x20).mask(0xF0) => "audio/mpeg"),
        rule!(byte(2, 0x30).mask(0xF0) => "audio/mpeg"),
        rule!(byte(2, 0x40).mask(0xF0) => "audio/mpeg"),
        rule!(byte(2, 0x50).mask(0xF0) => "audio/mpeg"),
        rule!(byte(2, 0x60).mask(0xF0) => "audio/mpeg"),
        rule!(byte(2, 0x70).mask(0xF0) => "audio/mpeg"),
        rule!(byte(2, 0x80).mask(0xF0) => "audio/mpeg"),
        rule!(byte(2, 0x90).mask(0xF0) => "audio/mpeg"),
        rule!(byte(2, 0xA0).mask(0xF0) => "audio/mpeg"),
        rule!(byte(2, 0xB0).mask(0xF0) => "audio/mpeg"),
        rule!(byte(2, 0xC0).mask(0xF0) => "audio/mpeg"),
        rule!(byte(2, 0xD0).mask(0xF0) => "audio/mpeg"),
        rule!(byte(2, 0xE0).mask(0xF0) => "audio/mpeg"),
    ]),
    rule!(le_short(4, 0xAF11) => [
        rule!(le_short(8, 320) => [
            rule!(le_short(10, 200) => [
                rule!(le_short(12, 8) => "video/x-fli"),
            ]),
        ]),
    ]),
    rule!(le_short(4, 0xAF12) => [
        rule!(le_short(12, 8) => "video/x-flc"),
    ]),
    rule!(be_long(0, 0x3026b275) => "video/x-ms-asf"),
    rule!(be_long(0, 0x1ee7ff00) => "application/x-eet"),
    rule!(le_long(0, 0x10201A7A) => "x-epoc/x-sisx-app"),
    rule!(be_long(0, 0x2e7261fd) => "audio/x-pn-realaudio"),
    rule!(le_short(0, 0x4d4d) => [
        rule!(le_short(6, 0x2) => [
            rule!(le_long(8, 0xa) => [
                rule!(le_short(16, 0x3d3d) => "image/x-3ds"),
            ]),
        ]),
    ]),
    rule!(be_long(0, 0xcafebabe) => [
        rule!(be_long(4, 30).gt() => "application/x-java-applet"),
    ]),
    rule!(be_long(0, 0xcafed00d) => "application/x-java-pack200"),
    rule!(be_long(0, 0xcafebabe) => [
        rule!(be_long(4, 1) => "application/x-mach-binary"),
        rule!(be_long(4, 1).gt() => [
            rule!(be_long(4, 20).lt() => "application/x-mach-binary"),
        ]),
    ]),
    rule!(le_short(0, 0x1f1f) => "application/octet-stream"),
    rule!(le_short(0, 0x1fff) => "application/octet-stream"),
    rule!(le_short(0, 0o145405) => "application/octet-stream"),
    rule!(le_long(0, 0x5d).mask(0xffffff) => [
        rule!(le_short(12, 0xff) => "application/x-lzma"),
    ]),
    rule!(le_long(0, 0x184d2204) => "application/x-lz4"),
    rule!(le_long(0, 0x184c2103) => "application/x-lz4"),
    rule!(le_long(0, 0x184c2102) => "application/x-lz4"),
    rule!(le_long(0, 0xFD2FB522) => "application/x-zstd"),
    rule!(le_long(0, 0xFD2FB523) => "application/x-zstd"),
    rule!(le_long(0, 0xFD2FB524) => "application/x-zstd"),
    rule!(le_long(0, 0xFD2FB525) => "application/x-zstd"),
    rule!(le_long(0, 0xFD2FB526) => "application/x-zstd"),
    rule!(le_long(0, 0xFD2FB527) => "application/x-zstd"),
    rule!(le_long(0, 0xFD2FB528) => "application/x-zstd"),
    rule!(le_long(0, 0xEC30A437) => "application/x-zstd-dictionary"),
    rule!(be_long(0, 0x13579acd) => "application/x-gdbm"),
    rule!(be_long(0, 0x13579ace) => "application/x-gdbm"),
    rule!(be_long(0, 0x13579acf) => "application/x-gdbm"),
    rule!(le_long(0, 0x13579acd) => "application/x-gdbm"),
    rule!(le_long(0, 0x13579ace) => "application/x-gdbm"),
    rule!(le_long(0, 0x13579acf) => "application/x-gdbm"),
    // dBase: only known version bytes qualify
    rule!(be_long(0, 0x00000C20).mask(0x0000FFFF).lt() => [
        rule!(byte(0, 1).gt() => [
            rule!(byte(0, 0x03) => "application/x-dbf"),
            rule!(byte(0, 0x04) => "application/x-dbf"),
            rule!(byte(0, 0x05) => "application/x-dbf"),
            rule!(byte(0, 0x30) => "application/x-dbf"),
            rule!(byte(0, 0x31) => "application/x-dbf"),
            rule!(byte(0, 0x32) => "application/x-dbf"),
            rule!(byte(0, 0x43) => "application/x-dbf"),
            rule!(byte(0, 0x7b) => "application/x-dbf"),
            rule!(ubyte(0, 0x83) => "application/x-dbf"),
            rule!(ubyte(0, 0x87) => "application/x-dbf"),
            rule!(ubyte(0, 0x8B) => "application/x-dbf"),
            rule!(ubyte(0, 0x8E) => "application/x-dbf"),
            rule!(ubyte(0, 0xCB) => "application/x-dbf"),
            rule!(ubyte(0, 0xE5) => "application/x-dbf"),
            rule!(ubyte(0, 0xF5) => "application/x-dbf"),
        ]),
    ]),
    // dBase memo: the header block after the next-free pointer is zeroed
    rule!(byte(16, 4).lt() => [
        rule!(be_long(4, 0) => [
            rule!(be_long(8, 0) => [
                rule!(be_long(12, 0) => "application/x-dbt"),
            ]),
        ]),
    ]),
    rule!(be_long(4, 0xefcdab89) => [
        rule!(be_long(132, 0) => "application/x-ms-ese"),
    ]),
    rule!(le_long(0, 0x0ef1fab9) => [
        rule!(le_short(16, 0) => "application/octet-stream"),
        rule!(le_short(16, 1) => "application/x-object"),
        rule!(le_short(16, 2) => "application/x-executable"),
        rule!(le_short(16, 3) => "application/x-sharedlib"),
        rule!(le_short(16, 4) => "application/x-coredump"),
    ]),
    rule!(le_long(0, 0x10000037) => [
        rule!(le_long(4, 0x1000006D) => [
            rule!(le_long(8, 0x1000007D) => "image/x-epoc-sketch"),
            rule!(le_long(8, 0x1000007F) => "application/x-epoc-word"),
            rule!(le_long(8, 0x10000085) => "application/x-epoc-opl"),
            rule!(le_long(8, 0x10000088) => "application/x-epoc-sheet"),
        ]),
        rule!(le_long(4, 0x10000073) => "application/x-epoc-opo"),
        rule!(le_long(4, 0x10000074) => "application/x-epoc-app"),
    ]),
    rule!(le_long(0, 0x10000050) => [
        rule!(le_long(4, 0x1000006D) => [
            rule!(le_long(8, 0x10000084) => "application/x-epoc-agenda"),
            rule!(le_long(8, 0x10000086) => "application/x-epoc-data"),
            rule!(le_long(8, 0x10000CEA) => "application/x-epoc-jotter"),
        ]),
    ]),
    rule!(le_short(0, 0x0100) => [
        rule!(le_short(66, 0x0081) => [
            rule!(flex(101, b"Postscript", LOWER).via(IndirectKind::LeLong, 0) => "application/x-font-pfm"),
        ]),
    ]),
    rule!(be_long(0, 4) => "application/x-font-sfn"),
    rule!(le_long(0, 4) => [
        rule!(le_long(104, 4) => "application/x-font-sfn"),
    ]),
    rule!(be_quad(0, 0).mask(0x00FeC400000000C0) => [
        rule!(byte(2, 34).lt() => "image/x-tga"),
    ]),
    rule!(be_long(0, 100).gt() => [
        rule!(be_long(8, 3).lt() => [
            rule!(be_long(12, 33).lt() => [
                rule!(be_long(4, 7) => "image/x-xwindowdump"),
            ]),
        ]),
    ]),
    rule!(be_long(0, 0x0a000000).mask(0xffF8fe00) => [
        rule!(byte(3, 0).gt() => [
            rule!(byte(1, 6).lt() => [
                rule!(byte(1, 1).inverted() => "image/x-pcx"),
            ]),
        ]),
    ]),
    rule!(le_long(0, 20000630) => "image/x-exr"),
    rule!(be_long(0, 0x0e031301) => "application/x-hdf"),
    rule!(le_long(0, 0x000000E9).mask(0x804000E9) => [
        rule!(le_short(11, 0).mask(0x001f) => [
            rule!(ule_short(11, 32769).lt() => [
                rule!(le_short(11, 31).gt() => [
                    rule!(byte(21, 0xF0).mask(0xf0) => [
                        rule!(byte(21, 0xF8).inverted() => [
                            rule!(string(54, b"FAT16").inverted() => [
                                rule!(le_long(11, 0x00ffffF0).mask(0x00ffffF0).via(IndirectKind::LeShort, 0) => "application/x-ima"),
                            ]),
                        ]),
                    ]),
                ]),
            ]),
        ]),
    ]),
    rule!(le_long(0, 0xfeedface).mask(0xfffffffe) => "application/x-mach-binary"),
    rule!(be_long(0, 0xfeedface).mask(0xfffffffe) => "application/x-mach-binary"),
    rule!(be_long(0, 0x1a45dfa3) => [
        rule!(search(4, b"B\x82", 4096, NO_FLAGS) => [
            rule!(string(1, b"webm").relative() => "video/webm"),
            rule!(string(1, b"matroska").relative() => "video/x-matroska"),
        ]),
    ]),
    rule!(le_quad(0, 0xffffffff).mask(0x07a0ffffffff) => "application/x-dosdriver"),
    rule!(byte(0, 0xb8) => [
        rule!(string(0, b"\xb8\xc0\x07\x8e").inverted() => [
            rule!(le_long(1, 0x21CD4CFe).mask(0xFFFFFFFe) => "application/x-c32-comboot-syslinux-exec"),
        ]),
    ]),
    rule!(be_long(0, 0x31be0000) => "application/msword"),
    rule!(le_long(4, 0) => [
        rule!(be_long(0, 0xfe320000) => "application/msword"),
        rule!(be_long(0, 0xfe340000) => "application/msword"),
        rule!(be_long(0, 0xfe37001c) => "application/msword"),
        rule!(be_long(0, 0xfe370023) => "application/msword"),
    ]),
    rule!(be_long(0, 0x00001a00) => [
        rule!(byte(20, 0).gt() => [
            rule!(byte(20, 32).lt() => "application/vnd.lotus-1-2-3"),
        ]),
    ]),
    rule!(be_long(0, 0x00000200) => [
        rule!(byte(7, 0) => [
            rule!(byte(6, 0).gt() => "application/vnd.lotus-1-2-3"),
        ]),
    ]),
    rule!(be_long(0, 0x00000100) => [
        rule!(le_long(18, 0x00000006).bits_set() => [
            rule!(be_long(0, 0x00000100) => "image/x-icon"),
            rule!(be_long(0, 0x00000200) => "image/x-win-bitmap"),
        ]),
    ]),
    rule!(be_long(0, 0xC5D0D3C6) => "image/x-eps"),
    rule!(le_short(0, 0x0100) => [
        rule!(be_long(0, 0x0001a364).inverted() => [
            rule!(be_short(2, 0x0008).inverted() => [
                rule!(be_quad(8, 0x2e01010454010203).inverted() => [
                    rule!(be_quad(8, 0x5dee74ad1aa56394).inverted() => "image/g3fax"),
                ]),
            ]),
        ]),
    ]),
    rule!(le_short(0, 0x1400) => "image/g3fax"),
    rule!(be_short(0, 0x4552) => [
        rule!(be_short(2, 0).mask(0xf1FF) => "application/x-apple-diskimage"),
    ]),
    rule!(be_short(0x400, 0x4244) => [
        rule!(be_short(0x40e, 0x0003) => [
            rule!(byte(0x424, 28).lt() => "application/x-apple-diskimage"),
        ]),
    ]),
    rule!(be_long(0, 0xedabeedb) => "application/x-rpm"),
    rule!(le_long(0, 0x00035f3f) => [
        rule!(le_short(4, 0x293B).via(IndirectKind::LeLong, 9) => [
            rule!(string(0xD4, b"bmf\x01\x00") => "application/x-winhelp"),
            rule!(string(0xD4, b"bmf\x01\x00").inverted() => [
                rule!(string(4, b"|Pete").via(IndirectKind::LeLong, 0x65) => "application/x-winhelp"),
                rule!(string(4, b"|Pete").via(IndirectKind::LeLong, 0x65).inverted() => "application/x-winhelp"),
            ]),
        ]),
    ]),
    rule!(le_short(0, 0x0000).mask(0xFeFe) => [
        rule!(le_long(4, 0x00000000).mask(0xFCffFe00) => [
            rule!(le_long(68, 0x57).gt() => [
                rule!(be_long(68, 0x00400018).mask(0xffE0C519).via(IndirectKind::LeLong, -1) => "application/x-pnf"),
            ]),
        ]),
    ]),
    rule!(byte(0, 0x80) => [
        rule!(le_short(1, 1022).lt() => [
            rule!(le_short(1, 0).gt() => [
                rule!(byte(3, 0).gt() => [
                    rule!(regex(4, "[a-zA-Z_/]{1,8}[.]", 0, PLAIN) => "application/x-object"),
                ]),
            ]),
        ]),
    ]),
    RuleNode {
        test: prefix_group(0, PREFIXES),
        mime: None,
        children: &[],
    },
    rule!(string(0, b"Glul") => [
        rule!(string(36, b"Info") => "application/x-glulx"),
    ]),
    rule!(string(0, b"TADS2 bin") => [
        rule!(be_long(9, 0x0A0D1A00) => [
            rule!(string(13, b"\x00").gt() => "application/x-tads"),
        ]),
    ]),
    rule!(string(0, b"TADS2 rsc") => [
        rule!(be_long(9, 0x0A0D1A00) => [
            rule!(string(13, b"\x00").gt() => "application/x-tads"),
        ]),
    ]),
    rule!(string(0, b"TADS2 save/g") => [
        rule!(be_long(12, 0x0A0D1A00) => [
            rule!(string(16, b"\x00").gt().via(IndirectKind::LeShort, 32) => "application/x-tads"),
        ]),
    ]),
    rule!(string(0, b"TADS2 save") => [
        rule!(be_long(10, 0x0A0D1A00) => [
            rule!(string(14, b"\x00").gt() => "application/x-tads"),
        ]),
    ]),
    rule!(string(0, b"T3-state-v") => [
        rule!(string(14, b"\r\n\x1a") => "application/x-t3vm-image"),
    ]),
    rule!(string(4, b"moov") => "video/quicktime"),
    rule!(string(4, b"mdat") => "video/quicktime"),
    rule!(string(4, b"idsc") => "image/x-quicktime"),
    rule!(string(4, b"pckg") => "application/x-quicktime-player"),
    rule!(string(4, b"ftyp") => [
        rule!(byte(11, 6) => "video/3gpp"),
        rule!(byte(11, 7) => "video/3gpp"),
        rule!(string(8, b"3g2") => "video/3gpp2"),
        rule!(string(8, b"3ge") => "video/3gpp"),
        rule!(string(8, b"avc1") => "video/mp4"),
        rule!(string(8, b"dash") => "video/mp4"),
        rule!(string(8, b"dvr1") => "video/vnd.dvb.file"),
        rule!(string(8, b"dvt1") => "video/vnd.dvb.file"),
        rule!(string(8, b"F4V") => "video/mp4"),
        rule!(string(8, b"F4P") => "video/mp4"),
        rule!(string(8, b"F4A") => "audio/mp4"),
        rule!(string(8, b"F4B") => "audio/mp4"),
        rule!(string(8, b"iso2") => "video/mp4"),
        rule!(string(8, b"isom") => "video/mp4"),
        rule!(string(8, b"JP2") => "image/jp2"),
        rule!(string(8, b"jpm") => "image/jpm"),
        rule!(string(8, b"jpx") => "image/jpx"),
        rule!(string(8, b"KDDI") => "video/3gpp2"),
        rule!(string(8, b"M4A") => "audio/x-m4a"),
        rule!(string(8, b"M4B") => "audio/mp4"),
        rule!(string(8, b"M4P") => "video/mp4"),
        rule!(string(8, b"M4V") => "video/x-m4v"),
        rule!(string(8, b"M4VH") => "video/x-m4v"),
        rule!(string(8, b"M4VP") => "video/x-m4v"),
        rule!(string(8, b"mj2s") => "video/mj2"),
        rule!(string(8, b"mjp2") => "video/mj2"),
        rule!(string(8, b"mmp4") => "video/mp4"),
        rule!(string(8, b"mobi") => "video/mp4"),
        rule!(string(8, b"mp41") => "video/mp4"),
        rule!(string(8, b"mp42") => "video/mp4"),
        rule!(string(8, b"mqt") => "video/quicktime"),
        rule!(string(8, b"MSNV") => "audio/mp4"),
        rule!(string(8, b"NDAS") => "audio/mp4"),
        rule!(string(8, b"NDSC") => "video/mp4"),
        rule!(string(8, b"NDSH") => "video/mp4"),
        rule!(string(8, b"NDSM") => "video/mp4"),
        rule!(string(8, b"NDSP") => "video/mp4"),
        rule!(string(8, b"NDSS") => "video/mp4"),
        rule!(string(8, b"NDXC") => "video/mp4"),
        rule!(string(8, b"NDXH") => "video/mp4"),
        rule!(string(8, b"NDXM") => "video/mp4"),
        rule!(string(8, b"NDXP") => "video/mp4"),
        rule!(string(8, b"NDXS") => "video/mp4"),
        rule!(string(8, b"qt") => "video/quicktime"),
        rule!(flex(8, b"qt", COMPACT) => "video/quicktime"),
        rule!(flex(8, b"jp2", COMPACT) => "image/jp2"),
    ]),
    rule!(string(257, b"ustar\x00") => "application/x-tar"),
    rule!(string(257, b"ustar  \x00") => "application/x-tar"),
    rule!(string(0, b"\xe9,\x01JAM ") => [
        rule!(string(2, b"-") => [
            rule!(string(6, b"-") => [
                rule!(byte(20, 4).lt() => [
                    rule!(regex(3, "^(lh[0-9a-ex]|lz[s2-8]|pm[012]|pc1)", 0, PLAIN) => "application/x-lzh-compressed"),
                ]),
            ]),
        ]),
    ]),
    rule!(string(0, b"PK\x03\x04") => [
        rule!(be_long(30, 0x6d696d65).inverted() => [
            rule!(byte(4, 0x00) => "application/zip"),
            rule!(byte(4, 0x09) => "application/zip"),
            rule!(byte(4, 0x0a) => "application/zip"),
            rule!(byte(4, 0x0b) => "application/zip"),
            rule!(byte(4, 0x14) => "application/zip"),
            rule!(string(0x161, b"WINZIP") => "application/zip"),
        ]),
        rule!(le_short(26, 0xcafe).via(IndirectKind::LeShort, 30) => "application/java-archive"),
        rule!(le_short(26, 0xcafe).via(IndirectKind::LeShort, 30).inverted() => [
            rule!(string(26, b"\x08\x00\x00\x00mimetype").inverted() => [
                rule!(string(30, b"Payload/") => [
                    rule!(search(38, b".app/", 64, NO_FLAGS) => "application/x-ios-app"),
                ]),
            ]),
        ]),
        rule!(le_short(26, 0xcafe).via(IndirectKind::LeShort, 30).inverted() => [
            rule!(string(26, b"\x08\x00\x00\x00mimetype").inverted() => "application/zip"),
        ]),
        rule!(string(26, b"\x08\x00\x00\x00mimetypeapplication/") => [
            rule!(string(50, b"vnd.oasis.opendocument.") => [
                rule!(string(73, b"text") => [
                    rule!(byte(77, 0x2d).inverted() => "application/vnd.oasis.opendocument.text"),
                    rule!(string(77, b"-template") => "application/vnd.oasis.opendocument.text-template"),
                    rule!(string(77, b"-web") => "application/vnd.oasis.opendocument.text-web"),
                    rule!(string(77, b"-master") => "application/vnd.oasis.opendocument.text-master"),
                ]),
                rule!(string(73, b"graphics") => [
                    rule!(byte(81, 0x2d).inverted() => "application/vnd.oasis.opendocument.graphics"),
                    rule!(string(81, b"-template") => "application/vnd.oasis.opendocument.graphics-template"),
                ]),
                rule!(string(73, b"presentation") => [
                    rule!(byte(85, 0x2d).inverted() => "application/vnd.oasis.opendocument.presentation"),
                    rule!(string(85, b"-template") => "application/vnd.oasis.opendocument.presentation-template"),
                ]),
                rule!(string(73, b"spreadsheet") => [
                    rule!(byte(84, 0x2d).inverted() => "application/vnd.oasis.opendocument.spreadsheet"),
                    rule!(string(84, b"-template") => "application/vnd.oasis.opendocument.spreadsheet-template"),
                ]),
                rule!(string(73, b"chart") => [
                    rule!(byte(78, 0x2d).inverted() => "application/vnd.oasis.opendocument.chart"),
                    rule!(string(78, b"-template") => "application/vnd.oasis.opendocument.chart-template"),
                ]),
                rule!(string(73, b"formula") => [
                    rule!(byte(80, 0x2d).inverted() => "application/vnd.oasis.opendocument.formula"),
                    rule!(string(80, b"-template") => "application/vnd.oasis.opendocument.formula-template"),
                ]),
                rule!(string(73, b"database") => "application/vnd.oasis.opendocument.database"),
                rule!(string(73, b"image") => [
                    rule!(byte(78, 0x2d).inverted() => "application/vnd.oasis.opendocument.image"),
                    rule!(string(78, b"-template") => "application/vnd.oasis.opendocument.image-template"),
                ]),
            ]),
            rule!(string(50, b"epub+zip") => "application/epub+zip"),
            rule!(string(50, b"epub+zip").inverted() => [
                rule!(string(50, b"vnd.oasis.opendocument.").inverted() => [
                    rule!(string(50, b"vnd.sun.xml.").inverted() => [
                        rule!(string(50, b"vnd.kde.").inverted() => [
                            rule!(regex(38, "[!-OQ-~]+", 0, PLAIN) => "application/zip"),
                        ]),
                    ]),
                ]),
            ]),
        ]),
        rule!(string(26, b"\x08\x00\x00\x00mimetype") => [
            rule!(string(38, b"application/").inverted() => [
                rule!(regex(38, "[!-OQ-~]+", 0, PLAIN) => "application/zip"),
            ]),
        ]),
    ]),
    rule!(string(10, b"# This is a shell archive") => "application/octet-stream"),
    rule!(string(0, b".snd") => [
        rule!(be_long(12, 1) => "audio/basic"),
        rule!(be_long(12, 2) => "audio/basic"),
        rule!(be_long(12, 3) => "audio/basic"),
        rule!(be_long(12, 4) => "audio/basic"),
        rule!(be_long(12, 5) => "audio/basic"),
        rule!(be_long(12, 6) => "audio/basic"),
        rule!(be_long(12, 7) => "audio/basic"),
        rule!(be_long(12, 23) => "audio/x-adpcm"),
    ]),
    rule!(string(0, b"AUDIMG") => [
        rule!(byte(13, 13).lt() => "audio/x-vpm-wav-garmin"),
    ]),
    rule!(string(0, b"<?php") => [
        rule!(regex(5, "[ \n]", 0, PLAIN) => [
            rule!(string(6, b"/* Smarty version") => [
                rule!(regex(24, "[0-9.]+", 0, PLAIN) => "text/x-php"),
            ]),
        ]),
    ]),
    rule!(string(0, b"7z\xbc\xaf'\x1c") => "application/x-7z-compressed"),
    rule!(string(0, b"LRZI") => "application/x-lrzip"),
    rule!(string(0, b"RaS") => [
        rule!(string(3, b"3") => "application/vnd.cups-raster"),
    ]),
    rule!(string(1, b"SaR") => [
        RuleNode {
            test: prefix_group(0, CUPS_RASTER),
            mime: None,
            children: &[],
        },
    ]),
    rule!(string(4, b"Standard Jet DB") => "application/x-msaccess"),
    rule!(string(4, b"Standard ACE DB") => "application/x-msaccess"),
    rule!(string(8, b"sdbf") => [
        rule!(byte(7, 0) => [
            rule!(le_short(12, 0x7802) => "application/x-ms-sdb"),
        ]),
    ]),
    rule!(string(0, b"FP2") => [
        rule!(string(0, b"F") => [
            rule!(byte(8, 0x08).mask(0xfd) => "application/x-shockwave-flash"),
            rule!(byte(8, 0x10).mask(0xfe) => "application/x-shockwave-flash"),
            rule!(byte(8, 0x18) => "application/x-shockwave-flash"),
            rule!(be_short(8, 0x2000).mask(0xff87) => "application/x-shockwave-flash"),
            rule!(be_short(8, 0x3000).mask(0xffe0) => "application/x-shockwave-flash"),
            rule!(byte(8, 0).mask(0x7) => [
                rule!(byte(8, 0x2f).gt() => [
                    rule!(byte(9, 0x20).lt() => "application/x-shockwave-flash"),
                ]),
            ]),
        ]),
        rule!(string(0, b"C") => [
            rule!(byte(8, 0x78) => "application/x-shockwave-flash"),
        ]),
        rule!(string(0, b"Z") => [
            rule!(byte(8, 0x5d) => "application/x-shockwave-flash"),
        ]),
    ]),
    rule!(string(0, b"FILE") => [
        rule!(string(8, b"PFF2") => [
            rule!(be_long(4, 4) => [
                rule!(string(12, b"NAME") => "application/x-font-pf2"),
            ]),
        ]),
    ]),
    rule!(string(0, b"\x00\x01\x00\x00") => [
        rule!(be_short(4, 47).lt() => [
            rule!(regex(12, "^[A-Za-z][A-Za-z][A-Za-z/][A-Za-z2 ]", 4 * 80, PLAIN) => [
                rule!(be_long(0, 0x4f54544f).inverted() => "application/font-sfnt"),
                rule!(be_long(0, 0x4f54544f) => "application/font-sfnt"),
            ]),
        ]),
    ]),
    rule!(string(0, b"ttcf") => [
        rule!(byte(4, 0) => "application/font-sfnt"),
    ]),
    rule!(string(0x40, &[0; 16]) => [
        rule!(string(0x22, b"LP") => [
            rule!(le_short(0x52, 0).inverted() => "application/vnd.ms-fontobject"),
        ]),
    ]),
    rule!(string(0, b"FORM") => [
        rule!(string(8, b"IFZS") => "application/x-blorb"),
    ]),
    rule!(string(0, b"P4") => [
        rule!(regex(0, r"P4[ \t\f\r\n]", 4, PLAIN) => "image/x-portable-bitmap"),
    ]),
    rule!(string(0, b"P5") => [
        rule!(regex(0, r"P5[ \t\f\r\n]", 4, PLAIN) => "image/x-portable-greymap"),
    ]),
    rule!(string(0, b"P6") => [
        rule!(regex(0, r"P6[ \t\f\r\n]", 4, PLAIN) => "image/x-portable-pixmap"),
    ]),
    rule!(string(0, b"\x89PNG\r\n\x1a\n\x00\x00\x00\x04CgBI") => [
        rule!(string(24, b"\x00\x00\x00\rIHDR") => "image/png"),
    ]),
    rule!(string(0, b"AWBM") => [
        rule!(le_short(4, 1981).lt() => "image/x-award-bmp"),
    ]),
    rule!(string(0, b"BM") => [
        rule!(le_short(14, 12) => "image/x-ms-bmp"),
        rule!(le_short(14, 64) => "image/x-ms-bmp"),
        rule!(le_short(14, 40) => "image/x-ms-bmp"),
        rule!(le_short(14, 124) => "image/x-ms-bmp"),
        rule!(le_short(14, 108) => "image/x-ms-bmp"),
        rule!(le_short(14, 128) => "image/x-ms-bmp"),
    ]),
    rule!(string(128, b"DICM") => "application/dicom"),
    rule!(string(16, b"TIMG\x00") => [
        rule!(be_short(0, 0x0003).lt() => "image/x-gem"),
    ]),
    rule!(string(0, b"AT&TFORM") => [
        rule!(string(12, b"DJVM") => "image/vnd.djvu"),
        rule!(string(12, b"DJVU") => "image/vnd.djvu"),
        rule!(string(12, b"DJVI") => "image/vnd.djvu"),
        rule!(string(12, b"THUM") => "image/vnd.djvu"),
    ]),
    rule!(string(512, b"\x89HDF\r\n\x1a\n") => "application/x-hdf"),
    rule!(string(1024, b"\x89HDF\r\n\x1a\n") => "application/x-hdf"),
    rule!(string(2048, b"\x89HDF\r\n\x1a\n") => "application/x-hdf"),
    rule!(string(4096, b"\x89HDF\r\n\x1a\n") => "application/x-hdf"),
    rule!(string(0, b"\x00\x00\x00\x0cjP  \r\n\x87\n") => [
        rule!(string(20, b"jp2 ") => "image/jp2"),
        rule!(string(20, b"jpx ") => "image/jpx"),
        rule!(string(20, b"jpm ") => "image/jpm"),
        rule!(string(20, b"mjp2") => "video/mj2"),
    ]),
    rule!(string(0, b"LPKSHHRH") => [
        rule!(byte(16, 0).mask(252) => [
            rule!(be_quad(24, 0).gt() => [
                rule!(be_quad(32, 0).gt() => [
                    rule!(be_quad(40, 0).gt() => [
                        rule!(be_quad(48, 0).gt() => [
                            rule!(be_quad(56, 0).gt() => [
                                rule!(be_quad(64, 0).gt() => "application/octet-stream"),
                            ]),
                        ]),
                    ]),
                ]),
            ]),
        ]),
    ]),
    rule!(string(19, b"\xa0\x05\xf9\x05\x00\t\x00\x02\x00") => [
        rule!(string(38913, b"NSR0") => "application/x-iso9660-image"),
        rule!(string(38913, b"NSR0").inverted() => "application/x-iso9660-image"),
    ]),
    rule!(string(37633, b"CD001") => "application/x-iso9660-image"),
    rule!(string(0, b"<?xml") => [
        rule!(search(20, b" xmlns=", 400, NO_FLAGS) => [
            rule!(regex(0, "['\"]http://earth.google.com/kml", 0, PLAIN).relative() => "application/vnd.google-earth.kml+xml"),
            rule!(regex(0, "['\"]http://www.opengis.net/kml", 0, PLAIN).relative() => "application/vnd.google-earth.kml+xml"),
        ]),
    ]),
    rule!(string(0, b"PK\x03\x04") => [
        rule!(byte(4, 0x14) => [
            rule!(string(30, b"doc.kml") => "application/vnd.google-earth.kmz"),
        ]),
    ]),
    rule!(string(60, b"RINEX") => [
        rule!(search(80, b"XXRINEXB", 256, NO_FLAGS) => "rinex/broadcast"),
        rule!(search(80, b"XXRINEXD", 256, NO_FLAGS) => "rinex/observation"),
        rule!(search(80, b"XXRINEXC", 256, NO_FLAGS) => "rinex/clock"),
        rule!(search(80, b"XXRINEXH", 256, NO_FLAGS) => "rinex/navigation"),
        rule!(search(80, b"XXRINEXG", 256, NO_FLAGS) => "rinex/navigation"),
        rule!(search(80, b"XXRINEXL", 256, NO_FLAGS) => "rinex/navigation"),
        rule!(search(80, b"XXRINEXM", 256, NO_FLAGS) => "rinex/meteorological"),
        rule!(search(80, b"XXRINEXN", 256, NO_FLAGS) => "rinex/navigation"),
        rule!(search(80, b"XXRINEXO", 256, NO_FLAGS) => "rinex/observation"),
    ]),
    rule!(string(0, b"0\x00\x00|") => [
        rule!(string(36, b"\x00>") => "application/octet-stream"),
    ]),
    rule!(string(0, b"0~\x00\x00") => [
        rule!(string(36, b"\x00>") => "application/octet-stream"),
    ]),
    rule!(string(39, b"\x02") => [
        rule!(string(136, b"\x02\x02\x04\x04") => "application/octet-stream"),
    ]),
    rule!(string(0, b"@") => [
        rule!(flex(1, b" echo off", COMPACT_LOWER) => "text/x-msdos-batch"),
        rule!(flex(1, b"echo off", COMPACT_LOWER) => "text/x-msdos-batch"),
        rule!(flex(1, b"rem", COMPACT_LOWER) => "text/x-msdos-batch"),
        rule!(flex(1, b"set ", COMPACT_LOWER) => "text/x-msdos-batch"),
    ]),
    rule!(string(0, b"MZ") => [
        rule!(string(0x1e, b"Copyright 1989-1990 PKWARE Inc.") => "application/zip"),
        rule!(string(0x1e, b"PKLITE Copr.") => "application/zip"),
    ]),
    rule!(string(2080, b"Microsoft Word 6.0 Document") => "application/msword"),
    rule!(string(2080, b"Documento Microsoft Word 6") => "application/msword"),
    rule!(string(2112, b"MSWordDoc") => "application/msword"),
    rule!(string(512, b"\xec\xa5\xc1") => "application/msword"),
    rule!(string(2080, b"Microsoft Excel 5.0 Worksheet") => "application/vnd.ms-excel"),
    rule!(string(2080, b"Foglio di lavoro Microsoft Exce") => "application/vnd.ms-excel"),
    rule!(string(2114, b"Biff5") => "application/vnd.ms-excel"),
    rule!(string(2121, b"Biff5") => "application/vnd.ms-excel"),
    rule!(string(0, b"\xd0\xcf\x11\xe0\xa1\xb1\x1a\xe1") => [
        rule!(string(546, b"bjbj") => "application/msword"),
        rule!(string(546, b"jbjb") => "application/msword"),
    ]),
    rule!(string(512, b"R\x00o\x00o\x00t\x00 \x00E\x00n\x00t\x00r\x00y") => "application/msword"),
    rule!(string(0, b"ITOLITLS") => "application/x-ms-reader"),
    rule!(string(0, b"PK\x03\x04") => [
        rule!(regex(0x1E, r"\[Content_Types\]\.xml|_rels/\.rels", 0, PLAIN) => [
            rule!(search(18, b"PK\x03\x04", 2000, NO_FLAGS).via(IndirectKind::LeLong, 49) => [
                rule!(search(26, b"PK\x03\x04", 1000, NO_FLAGS).relative() => [
                    rule!(string(26, b"word/").relative() => "application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
                    rule!(string(26, b"ppt/").relative() => "application/vnd.openxmlformats-officedocument.presentationml.presentation"),
                    rule!(string(26, b"xl/").relative() => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
                ]),
            ]),
        ]),
    ]),
    rule!(string(0, b"Microsoft C/C++ ") => [
        rule!(search(24, b"\r\n\x1a", 14, NO_FLAGS) => "application/x-ms-pdb"),
    ]),
    rule!(string(0, b"#!") => [
        rule!(regex(0, "^#!.*/bin/perl([[:space:]].*)*$", 0, PLAIN) => "text/x-perl"),
    ]),
    rule!(string(2, b"---BEGIN PGP PUBLIC KEY BLOCK-") => "application/pgp-keys"),
    rule!(string(0, b"RIFF") => [
        rule!(string(8, b"WAVE") => "audio/x-wav"),
        rule!(string(8, b"CDRA") => "image/x-coreldraw"),
        rule!(string(8, b"CDR6") => "image/x-coreldraw"),
        rule!(string(8, b"AVI ") => "video/x-msvideo"),
        rule!(string(8, b"WEBP") => "image/webp"),
    ]),
    rule!(string(4, b"O") => [
        rule!(be_quad(84, 0x00Fe00000000Fe00).bits_clear() => [
            rule!(regex(5, r"[=.<>|!^\x8a]{79}", 0, BEGIN) => "application/x-appleworks3"),
        ]),
    ]),
    rule!(string(0, b"HEADER    ") => [
        rule!(regex(0, "^.{40}", 80, PLAIN).relative() => [
            rule!(regex(0, "[0-9]{2}-[A-Z]{3}-[0-9]{2} {3}", 80, PLAIN).relative() => [
                rule!(regex(0, "[A-Z0-9]{4}.{14}$", 80, BEGIN).relative() => [
                    rule!(regex(0, "[A-Z0-9]{4}", 80, PLAIN).relative() => "chemical/x-pdb"),
                ]),
            ]),
        ]),
    ]),
    rule!(string(0, b"<?xml version=") => [
        rule!(regex(14, "['\" \t]*[0-9.]+['\" \t]*", 0, PLAIN) => [
            rule!(search(19, b"<svg", 4096, NO_FLAGS) => "image/svg+xml"),
            rule!(search(19, b"<gnc-v2", 4096, NO_FLAGS) => "application/x-gnucash"),
        ]),
    ]),
    rule!(string(0, b"<?xml version=") => [
        rule!(regex(14, "['\" \t]*[0-9.]+['\" \t]*", 0, PLAIN) => [
            rule!(search(19, b"<urlset", 4096, NO_FLAGS) => "application/xml-sitemap"),
        ]),
    ]),
    rule!(string(0, b"<?xml version=\"") => [
        rule!(search(19, b"<!doctype html", 4096, COMPACT_LOWER) => [
            rule!(string(15, b"\x00").gt() => "text/html"),
        ]),
    ]),
    rule!(string(0, b"<?xml version='") => [
        rule!(search(19, b"<!doctype html", 4096, COMPACT_LOWER) => [
            rule!(string(15, b"\x00").gt() => "text/html"),
        ]),
    ]),
    rule!(string(0, b"<?xml version=\"") => [
        rule!(search(19, b"<html", 4096, COMPACT_LOWER) => [
            rule!(string(15, b"\x00").gt() => "text/html"),
        ]),
    ]),
    rule!(string(0, b"\x1a\x01") => [
        rule!(byte(16, 32).gt() => [
            rule!(regex(12, "^[a-zA-Z0-9][a-zA-Z0-9.][^|]*", 0, PLAIN) => "application/x-terminfo"),
        ]),
    ]),
    rule!(string(0, b"\x1e\x02") => [
        rule!(byte(16, 32).gt() => [
            rule!(regex(12, "^[a-zA-Z0-9][a-zA-Z0-9.][^|]*", 0, PLAIN) => "application/x-terminfo2"),
        ]),
    ]),
    rule!(string(2, b"\x00\x11") => "application/x-tex-tfm"),
    rule!(string(2, b"\x00\x12") => "application/x-tex-tfm"),
    rule!(string(0, b"OggS") => [
        rule!(byte(4, 0) => [
            rule!(string(28, b"FLAC") => "audio/ogg"),
            rule!(string(28, b"\x80theora") => "video/ogg"),
            rule!(string(28, b"\x80kate\x00\x00\x00\x00") => "application/ogg"),
            rule!(string(28, b"fishead\x00") => "video/ogg"),
            rule!(string(28, b"Speex   ") => "audio/ogg"),
            rule!(string(28, b"\x01video\x00\x00\x00") => "video/ogg"),
            rule!(string(28, b"\x01vorbis") => "audio/ogg"),
            rule!(string(28, b"OpusHead") => "audio/ogg"),
        ]),
    ]),
    rule!(string(0, b"PMCC") => [
        rule!(le_short(0, 0x036C) => [
            rule!(le_short(4, 1) => "application/winhelp"),
        ]),
    ]),
    rule!(string(512, b"R\x00o\x00o\x00t\x00") => "application/x-hwp"),
    rule!(string(0, b"DOC") => [
        rule!(byte(43, 0x14) => "application/x-ichitaro4"),
    ]),
    rule!(string(0, b"DOC") => [
        rule!(byte(43, 0x15) => "application/x-ichitaro5"),
    ]),
    rule!(string(0, b"DOC") => [
        rule!(byte(43, 0x16) => "application/x-ichitaro6"),
    ]),
    rule!(string(0, b"!<arch>\ndebian") => [
        rule!(string(8, b"debian-split") => "application/vnd.debian.binary-package"),
        rule!(string(8, b"debian-binary") => "application/vnd.debian.binary-package"),
    ]),
    rule!(flex(4, b"jP", COMPACT) => "image/jp2"),
    rule!(flex(0, b"#VRML V1.0 ascii", IGNORE) => "model/vrml"),
    rule!(flex(0, b"#VRML V2.0 utf8", IGNORE) => "model/vrml"),
    rule!(flex(0, b"<?xml version=", IGNORE) => [
        rule!(search(20, b"<!DOCTYPE X3D", 1000, IGNORE) => "model/x3d+xml"),
    ]),
    rule!(flex(0, b"#! /bin/sh", IGNORE) => "text/x-shellscript"),
    rule!(flex(0, b"#! /bin/csh", IGNORE) => "text/x-shellscript"),
    rule!(flex(0, b"#! /bin/ksh", IGNORE) => "text/x-shellscript"),
    rule!(flex(0, b"#! /bin/tcsh", IGNORE) => "text/x-shellscript"),
    rule!(flex(0, b"#! /usr/bin/tcsh", IGNORE) => "text/x-shellscript"),
    rule!(flex(0, b"#! /usr/local/tcsh", IGNORE) => "text/x-shellscript"),
    rule!(flex(0, b"#! /usr/local/bin/tcsh", IGNORE) => "text/x-shellscript"),
    rule!(flex(0, b"#! /bin/zsh", IGNORE) => "text/x-shellscript"),
    rule!(flex(0, b"#! /usr/bin/zsh", IGNORE) => "text/x-shellscript"),
    rule!(flex(0, b"#! /usr/local/bin/zsh", IGNORE) => "text/x-shellscript"),
    rule!(flex(0, b"#! /usr/local/bin/ash", IGNORE) => "text/x-shellscript"),
    rule!(flex(0, b"#! /usr/local/bin/ae", IGNORE) => "text/x-shellscript"),
    rule!(flex(0, b"#! /bin/nawk", IGNORE) => "text/x-nawk"),
    rule!(flex(0, b"#! /usr/bin/nawk", IGNORE) => "text/x-nawk"),
    rule!(flex(0, b"#! /usr/local/bin/nawk", IGNORE) => "text/x-nawk"),
    rule!(flex(0, b"#! /bin/gawk", IGNORE) => "text/x-gawk"),
    rule!(flex(0, b"#! /usr/bin/gawk", IGNORE) => "text/x-gawk"),
    rule!(flex(0, b"#! /usr/local/bin/gawk", IGNORE) => "text/x-gawk"),
    rule!(flex(0, b"#! /bin/awk", IGNORE) => "text/x-awk"),
    rule!(flex(0, b"#! /usr/bin/awk", IGNORE) => "text/x-awk"),
    rule!(flex(0, b"#! /bin/bash", IGNORE) => "text/x-shellscript"),
    rule!(flex(0, b"#! /usr/bin/bash", IGNORE) => "text/x-shellscript"),
    rule!(flex(0, b"#! /usr/local/bash", IGNORE) => "text/x-shellscript"),
    rule!(flex(0, b"#! /usr/local/bin/bash", IGNORE) => "text/x-shellscript"),
    rule!(flex(0, b"#! /usr/bin/env bash", IGNORE) => "text/x-shellscript"),
    rule!(flex(0, b"BEGIN:VCALENDAR", LOWER) => "text/calendar"),
    rule!(flex(0, b"BEGIN:VCARD", LOWER) => "text/vcard"),
    rule!(flex(0, b"<map version", IGNORE) => "application/x-freemind"),
    rule!(flex(0, b"<map version=\"freeplane", IGNORE) => "application/x-freeplane"),
    rule!(search(0, b"<?php", 1, LOWER) => "text/x-php"),
    rule!(search(0, b"<?\n", 1, NO_FLAGS) => "text/x-php"),
    rule!(search(0, b"<?\r", 1, NO_FLAGS) => "text/x-php"),
    rule!(search(0, b"#! /usr/local/bin/php", 1, IGNORE) => "text/x-php"),
    rule!(search(0, b"#! /usr/bin/php", 1, IGNORE) => "text/x-php"),
    rule!(search(0, b"<MakerDictionary", 1, NO_FLAGS) => "application/x-mif"),
    rule!(search(0, b"P1", 1, NO_FLAGS) => [
        rule!(regex(0, r"P1[ \t\f\r\n]", 4, PLAIN) => "image/x-portable-bitmap"),
    ]),
    rule!(search(0, b"P2", 1, NO_FLAGS) => [
        rule!(regex(0, r"P2[ \t\f\r\n]", 4, PLAIN) => "image/x-portable-greymap"),
    ]),
    rule!(search(0, b"P3", 1, NO_FLAGS) => [
        rule!(regex(0, r"P3[ \t\f\r\n]", 4, PLAIN) => "image/x-portable-pixmap"),
    ]),
    rule!(search(0, b"/* XPM */", 1, NO_FLAGS) => "image/x-xpmi"),
    rule!(search(0, b"#!/bin/node", 1, IGNORE) => "application/javascript"),
    rule!(search(0, b"#!/usr/bin/node", 1, IGNORE) => "application/javascript"),
    rule!(search(0, b"#!/bin/nodejs", 1, IGNORE) => "application/javascript"),
    rule!(search(0, b"#!/usr/bin/nodejs", 1, IGNORE) => "application/javascript"),
    rule!(search(0, b"#!/usr/bin/env node", 1, NO_FLAGS) => "application/javascript"),
    rule!(search(0, b"#!/usr/bin/env nodejs", 1, NO_FLAGS) => "application/javascript"),
    rule!(search(0, b"<TeXmacs|", 1, NO_FLAGS) => "text/texmacs"),
    rule!(search(0, b"#! /usr/bin/lua", 1, IGNORE) => "text/x-lua"),
    rule!(search(0, b"#! /usr/local/bin/lua", 1, IGNORE) => "text/x-lua"),
    rule!(search(0, b"#!/usr/bin/env lua", 1, NO_FLAGS) => "text/x-lua"),
    rule!(search(0, b"#! /usr/bin/env lua", 1, NO_FLAGS) => "text/x-lua"),
    rule!(search(0, b"#! /usr/bin/python", 1, IGNORE) => "text/x-python"),
    rule!(search(0, b"#! /usr/local/bin/python", 1, IGNORE) => "text/x-python"),
    rule!(search(0, b"#!/usr/bin/env python", 1, NO_FLAGS) => "text/x-python"),
    rule!(search(0, b"#! /usr/bin/ruby", 1, IGNORE) => "text/x-ruby"),
    rule!(search(0, b"#! /usr/local/bin/ruby", 1, IGNORE) => "text/x-ruby"),
    rule!(search(0, b"#!/usr/bin/env ruby", 1, NO_FLAGS) => "text/x-ruby"),
    rule!(search(0, b"#! /usr/bin/env ruby", 1, NO_FLAGS) => "text/x-ruby"),
    rule!(search(0, b"<?xml", 1, IGNORE_LOWER) => "text/xml"),
    rule!(search(0, b"<?XML", 1, IGNORE) => "text/xml"),
    rule!(search(0, b"#! /usr/bin/tcl", 1, IGNORE) => "text/x-tcl"),
    rule!(search(0, b"#! /usr/local/bin/tcl", 1, IGNORE) => "text/x-tcl"),
    rule!(search(0, b"#!/usr/bin/env tcl", 1, NO_FLAGS) => "text/x-tcl"),
    rule!(search(0, b"#! /usr/bin/env tcl", 1, NO_FLAGS) => "text/x-tcl"),
    rule!(search(0, b"#! /usr/bin/wish", 1, IGNORE) => "text/x-tcl"),
    rule!(search(0, b"#! /usr/local/bin/wish", 1, IGNORE) => "text/x-tcl"),
    rule!(search(0, b"#!/usr/bin/env wish", 1, NO_FLAGS) => "text/x-tcl"),
    rule!(search(0, b"#! /usr/bin/env wish", 1, NO_FLAGS) => "text/x-tcl"),
    rule!(search(0, b"\\input texinfo", 1, NO_FLAGS) => "text/x-texinfo"),
    rule!(search(0, b"This is Info file", 1, NO_FLAGS) => "text/x-info"),
    rule!(regex(0, "^PROC", 0, PLAIN) => "text/x-Algol68"),
    rule!(regex(0, "MODE[\t ]", 0, PLAIN) => "text/x-Algol68"),
    rule!(regex(0, "REF[\t ]", 0, PLAIN) => "text/x-Algol68"),
    rule!(regex(0, r"FLEX[\t ]*\[", 0, PLAIN) => "text/x-Algol68"),
    rule!(regex(0, "^#import", 0, PLAIN) => "text/x-objective-c"),
    rule!(regex(0, r"^from[ \t\f\r\n]+([A-Za-z0-9_]|\.)+[ \t\f\r\n]+import.*$", 0, PLAIN) => "text/x-python"),
    rule!(regex(0, "^import [_[:alpha:]]+ as [[:alpha:]][[:space:]]*$", 0, PLAIN) => "text/x-python"),
    rule!(regex(0, r"^class [_[:alpha:]]+(\(.*\))?( )*:([ \t]+pass)?$", 0, PLAIN) => "text/x-python"),
    rule!(regex(0, "^[[:space:]]{0,50}def {1,50}[_a-zA-Z]{1,100}", 0, PLAIN) => [
        rule!(regex(0, r"\(([[:alpha:]*_, ]){0,255}\):$", 0, PLAIN).relative() => "text/x-python"),
    ]),
    rule!(regex(0, "^[[:space:]]*require[[:space:]]'[A-Za-z_/]+'", 0, PLAIN) => [
        rule!(regex(0, "def [a-z]| do$", 0, PLAIN) => [
            rule!(regex(0, "^[[:space:]]*end([[:space:]]+[;#].*)?$", 0, PLAIN).relative() => "text/x-ruby"),
        ]),
    ]),
    rule!(regex(0, "^[[:space:]]*(class|module)[[:space:]][A-Z]", 0, PLAIN) => [
        rule!(regex(0, "(modul|includ)e [A-Z]|def [a-z]", 0, PLAIN) => [
            rule!(regex(0, "^[[:space:]]*end([[:space:]]+[;#].*)?$", 0, PLAIN).relative() => "text/x-ruby"),
        ]),
    ]),
    rule!(regex(0, "^[[:space:]]*(class|module)[[:space:]][A-Z]", 0, PLAIN) => [
        rule!(regex(0, "^[[:space:]]*end([[:space:]]+[;#if].*)?$", 0, PLAIN).relative() => "text/x-ruby"),
    ]),
    rule!(regex(0, "^[[:space:]]*def [a-z]|def [[:alpha:]]+::[a-z]", 0, PLAIN) => [
        rule!(regex(0, "^[[:space:]]*end([[:space:]]+[;#].*)?$", 0, PLAIN).relative() => "text/x-ruby"),
    ]),
    rule!(regex(0, "^[[:space:]]*require[[:space:]]'[A-Za-z_/]+'", 0, PLAIN) => "text/x-ruby"),
    rule!(regex(0, "^[[:space:]]*include ([A-Z]+[a-z]*(::))+", 0, PLAIN) => "text/x-ruby"),
    rule!(regex(0, "^(:|;)", 0, PLAIN) => [
        rule!(string(0, b" ") => [
            rule!(regex(1, "^([^\r>]*|.*.hlp)", 0, NO_CASE) => "text/plain"),
        ]),
    ]),
    rule!(regex(0, r"\A(\r\n|;|\[)", 0, BEGIN) => [
        rule!(search(0, b"[", 8192, NO_FLAGS).relative() => [
            rule!(be_quad(0, 0x0056004500520053).mask(0xFFdfFFdfFFdfFFdf).relative() => [
                rule!(be_quad(0, 0x0049004f004e005d).mask(0xFFdfFFdfFFdfFFff).relative() => "application/x-setupscript"),
            ]),
            rule!(be_quad(0, 0x0053005400520049).mask(0xFFdfFFdfFFdfFFdf).relative() => [
                rule!(be_quad(0, 0x004e00470053005D).mask(0xFFdfFFdfFFdfFFff).relative() => "application/x-setupscript"),
            ]),
            rule!(search(0, b"[", 8192, NO_FLAGS).relative() => [
                rule!(be_quad(0, 0x0056004500520053).mask(0xFFdfFFdfFFdfFFdf).relative() => [
                    rule!(be_quad(0, 0x0049004f004e005d).mask(0xFFdfFFdfFFdfFFff).relative() => "application/x-setupscript"),
                ]),
                rule!(flex(0, b"version", LOWER).relative() => "application/x-setupscript"),
            ]),
            rule!(regex(0, r"^(autorun)\]\r\n", 0, NO_CASE).relative() => [
                rule!(byte(0, 0x5b).relative() => "application/x-wine-extension-ini"),
                rule!(byte(0, 0x5b).relative().inverted() => "application/x-setupscript"),
            ]),
            rule!(regex(0, r"^(version|strings)\]", 0, NO_CASE).relative() => "application/x-setupscript"),
            rule!(regex(0, r"^(WinsockCRCList|OEMCPL)\]", 0, NO_CASE).relative() => "text/inf"),
            rule!(regex(0, r"^(.ShellClassInfo|DeleteOnCopy|LocalizedFileNames)\]", 0, NO_CASE).relative() => "application/x-wine-extension-ini"),
            rule!(regex(0, r"^(don't load)\]", 0, NO_CASE).relative() => "application/x-wine-extension-ini"),
            rule!(regex(0, r"^(ndishlp\$|protman\$|NETBEUI\$)\]", 0, NO_CASE).relative() => "application/x-wine-extension-ini"),
            rule!(regex(0, r"^(windows|Compatibility|embedding)\]", 0, NO_CASE).relative() => "application/x-wine-extension-ini"),
            rule!(regex(0, r"^(boot|386enh|drivers)\]", 0, NO_CASE).relative() => "application/x-wine-extension-ini"),
            rule!(regex(0, r"^(SafeList)\]", 0, NO_CASE).relative() => "application/x-wine-extension-ini"),
            rule!(regex(0, r"^(boot loader)\]", 0, NO_CASE).relative() => "application/x-wine-extension-ini"),
        ]),
    ]),
    rule!(search(0, b"(input,", 8192, NO_FLAGS) => "text/x-Algol68"),
    rule!(search(0, b"%PDF-", 256, NO_FLAGS) => "application/pdf"),
    rule!(search(0, b"eval \"exec perl", 1024, NO_FLAGS) => "text/x-perl"),
    rule!(search(0, b"eval \"exec /bin/perl", 1024, NO_FLAGS) => "text/x-perl"),
    rule!(search(0, b"eval \"exec /usr/bin/perl", 1024, NO_FLAGS) => "text/x-perl"),
    rule!(search(0, b"eval \"exec /usr/local/bin/perl", 1024, NO_FLAGS) => "text/x-perl"),
    rule!(search(0, b"eval 'exec perl", 1024, NO_FLAGS) => "text/x-perl"),
    rule!(search(0, b"eval 'exec /bin/perl", 1024, NO_FLAGS) => "text/x-perl"),
    rule!(search(0, b"eval 'exec /usr/bin/perl", 1024, NO_FLAGS) => "text/x-perl"),
    rule!(search(0, b"eval 'exec /usr/local/bin/perl", 1024, NO_FLAGS) => "text/x-perl"),
    rule!(search(0, b"eval '(exit $?0)' && eval 'exec", 1024, NO_FLAGS) => "text/x-perl"),
    rule!(search(0, b"#! /usr/bin/env python", 10, NO_FLAGS) => "text/x-python"),
    rule!(search(0, b"def __init__", 4096, NO_FLAGS) => [
        rule!(search(0, b"self", 64, NO_FLAGS).relative() => "text/x-python"),
    ]),
    rule!(search(0, b"if __name__", 4096, NO_FLAGS) => [
        rule!(search(0, b"\"__main__\"", 64, NO_FLAGS).relative() => "text/x-python"),
    ]),
    rule!(search(0, b"try:", 4096, NO_FLAGS) => [
        rule!(regex(0, "^[[:space:]]*except.*:$", 0, PLAIN).relative() => "text/x-python"),
        rule!(search(0, b"finally:", 4096, NO_FLAGS).relative() => "text/x-python"),
    ]),
    rule!(search(0, b"<!doctype html", 4096, COMPACT_LOWER) => "text/html"),
    rule!(search(0, b"<!doctype svg", 4096, COMPACT_LOWER) => "image/svg+xml"),
    rule!(search(0, b"<head>", 4096, IGNORE_LOWER) => "text/html"),
    rule!(search(0, b"<head ", 4096, COMPACT_LOWER) => "text/html"),
    rule!(search(0, b"<title>", 4096, IGNORE_LOWER) => "text/html"),
    rule!(search(0, b"<title ", 4096, COMPACT_LOWER) => "text/html"),
    rule!(search(0, b"<html>", 4096, IGNORE_LOWER) => "text/html"),
    rule!(search(0, b"<html ", 4096, COMPACT_LOWER) => "text/html"),
    rule!(search(0, b"<script>", 4096, IGNORE_LOWER) => "text/html"),
    rule!(search(0, b"<script ", 4096, COMPACT_LOWER) => "text/html"),
    rule!(search(0, b"<style>", 4096, IGNORE_LOWER) => "text/html"),
    rule!(search(0, b"<style ", 4096, COMPACT_LOWER) => "text/html"),
    rule!(search(0, b"<table>", 4096, IGNORE_LOWER) => "text/html"),
    rule!(search(0, b"<table ", 4096, COMPACT_LOWER) => "text/html"),
    rule!(search(0, b"<a href=", 4096, IGNORE_LOWER) => "text/html"),
    rule!(search(0, b"\\input", 4096, NO_FLAGS) => "text/x-tex"),
    rule!(search(0, b"\\begin", 4096, NO_FLAGS) => "text/x-tex"),
    rule!(search(0, b"\\section", 4096, NO_FLAGS) => "text/x-tex"),
    rule!(search(0, b"\\setlength", 4096, NO_FLAGS) => "text/x-tex"),
    rule!(search(0, b"\\documentstyle", 4096, NO_FLAGS) => "text/x-tex"),
    rule!(search(0, b"\\chapter", 4096, NO_FLAGS) => "text/x-tex"),
    rule!(search(0, b"\\documentclass", 4096, NO_FLAGS) => "text/x-tex"),
    rule!(search(0, b"\\relax", 4096, NO_FLAGS) => "text/x-tex"),
    rule!(search(0, b"\\contentsline", 4096, NO_FLAGS) => "text/x-tex"),
    rule!(search(0, b"% -*-latex-*-", 4096, NO_FLAGS) => "text/x-tex"),
];

/// The builtin rule set.
pub static RULES: RuleSet<'static> = RuleSet::new(TREES);
