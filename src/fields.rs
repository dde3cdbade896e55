//! Read-only field extraction and the alternate textual renderings.

use crate::clock::GREGORIAN_OFFSET_MS;
use crate::{Error, Uuid};

/// The six RFC 4122 fields of a UUID, each available as an integer or a
/// zero-padded hex string.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct Fields {
    time_low: u32,
    time_mid: u16,
    time_hi_and_version: u16,
    clock_seq_hi_and_reserved: u8,
    clock_seq_low: u8,
    node: [u8; 6],
}

impl Fields {
    /// Extracts the fields of `uuid`.
    ///
    /// Extraction, like any formatting, demands a complete value and fails
    /// with [`Error::IncompleteValue`] otherwise.
    pub fn of(uuid: &Uuid) -> Result<Self, Error> {
        if !uuid.is_valid() {
            return Err(Error::IncompleteValue(uuid.as_bytes().len()));
        }
        let octet = uuid.octet();
        let mut node = [0u8; 6];
        node.copy_from_slice(&uuid.as_bytes()[10..16]);
        Ok(Self {
            time_low: octet.slice(0, Some(4)).to_u32()?,
            time_mid: octet.slice(4, Some(2)).to_u16()?,
            time_hi_and_version: octet.slice(6, Some(2)).to_u16()?,
            clock_seq_hi_and_reserved: octet.get(8).unwrap_or(0),
            clock_seq_low: octet.get(9).unwrap_or(0),
            node,
        })
    }

    pub fn time_low(&self) -> u32 {
        self.time_low
    }

    pub fn time_mid(&self) -> u16 {
        self.time_mid
    }

    pub fn time_hi_and_version(&self) -> u16 {
        self.time_hi_and_version
    }

    pub fn clock_seq_hi_and_reserved(&self) -> u8 {
        self.clock_seq_hi_and_reserved
    }

    pub fn clock_seq_low(&self) -> u8 {
        self.clock_seq_low
    }

    pub fn node(&self) -> [u8; 6] {
        self.node
    }

    /// `time_low` as eight hex digits.
    pub fn time_low_hex(&self) -> String {
        format!("{:08x}", self.time_low)
    }

    /// `time_mid` as four hex digits.
    pub fn time_mid_hex(&self) -> String {
        format!("{:04x}", self.time_mid)
    }

    /// `time_hi_and_version` as four hex digits.
    pub fn time_hi_and_version_hex(&self) -> String {
        format!("{:04x}", self.time_hi_and_version)
    }

    /// `clock_seq_hi_and_reserved` as two hex digits.
    pub fn clock_seq_hi_and_reserved_hex(&self) -> String {
        format!("{:02x}", self.clock_seq_hi_and_reserved)
    }

    /// `clock_seq_low` as two hex digits.
    pub fn clock_seq_low_hex(&self) -> String {
        format!("{:02x}", self.clock_seq_low)
    }

    /// The node as twelve hex digits.
    pub fn node_hex(&self) -> String {
        self.node.iter().map(|byte| format!("{byte:02x}")).collect()
    }
}

/// The supported textual renderings.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Style {
    /// `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`, the canonical form.
    Hyphenated,
    /// The canonical form wrapped in braces.
    Braced,
    /// 32 hex digits with no separators.
    Simple,
    /// The C struct initializer literal,
    /// `{0x…,0x…,0x…,{0x…,…,0x…}}`.
    Struct,
}

impl Style {
    /// Renders `fields` in this style.
    pub fn render(self, fields: &Fields) -> String {
        let hyphenated = format!(
            "{}-{}-{}-{}{}-{}",
            fields.time_low_hex(),
            fields.time_mid_hex(),
            fields.time_hi_and_version_hex(),
            fields.clock_seq_hi_and_reserved_hex(),
            fields.clock_seq_low_hex(),
            fields.node_hex(),
        );
        match self {
            Self::Hyphenated => hyphenated,
            Self::Braced => format!("{{{hyphenated}}}"),
            Self::Simple => hyphenated.replace('-', ""),
            Self::Struct => {
                let tail: Vec<String> = [fields.clock_seq_hi_and_reserved, fields.clock_seq_low]
                    .iter()
                    .chain(fields.node.iter())
                    .map(|byte| format!("0x{byte:02x}"))
                    .collect();
                format!(
                    "{{0x{},0x{},0x{},{{{}}}}}",
                    fields.time_low_hex(),
                    fields.time_mid_hex(),
                    fields.time_hi_and_version_hex(),
                    tail.join(","),
                )
            }
        }
    }
}

/// Renders `uuid` in the given style.
pub fn format(uuid: &Uuid, style: Style) -> Result<String, Error> {
    Ok(style.render(&Fields::of(uuid)?))
}

/// A version 1 UUID reinterpreted as its time components.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct TimeFields {
    ticks: u64,
    clock_seq: u16,
    node: [u8; 6],
}

impl TimeFields {
    /// Interprets a version 1 value.
    ///
    /// The version nibble is the sole source of truth here; any other
    /// version fails with [`Error::VersionMismatch`].
    pub fn of(uuid: &Uuid) -> Result<Self, Error> {
        let version = uuid.version();
        if version != 1 {
            return Err(Error::VersionMismatch {
                expected: 1,
                found: version,
            });
        }
        let fields = Fields::of(uuid)?;
        Ok(Self {
            ticks: u64::from(fields.time_hi_and_version & 0x0fff) << 48
                | u64::from(fields.time_mid) << 32
                | u64::from(fields.time_low),
            clock_seq: u16::from(fields.clock_seq_hi_and_reserved & 0x3f) << 8
                | u16::from(fields.clock_seq_low),
            node: fields.node,
        })
    }

    /// The 60-bit count of 100ns ticks since 1582-10-15.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The 14-bit clock sequence.
    pub fn clock_seq(&self) -> u16 {
        self.clock_seq
    }

    /// The 6 node bytes.
    pub fn node(&self) -> [u8; 6] {
        self.node
    }

    /// The Unix millisecond timestamp the ticks encode.
    pub fn unix_ms(&self) -> i64 {
        (self.ticks / 10_000) as i64 - GREGORIAN_OFFSET_MS as i64
    }
}
