//! RTC AccessToken2 ("007") encoding.
//!
//! A token is `007` followed by base64 of the zlib-compressed payload
//! `string(signature) ‖ signing_info`. All integers are little-endian;
//! strings are prefixed with a `u16` byte length and maps with a `u16`
//! entry count, entries sorted by key.

use std::collections::BTreeMap;
use std::io::Write;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use flate2::{write::ZlibEncoder, Compression};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::services::error::SigningError;

type HmacSha256 = Hmac<Sha256>;

pub const VERSION: &str = "007";
pub const SERVICE_TYPE_RTC: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum RtcPrivilege {
    JoinChannel = 1,
    PublishAudioStream = 2,
    PublishVideoStream = 3,
    PublishDataStream = 4,
}

#[derive(Default)]
struct Packer {
    buf: Vec<u8>,
}

impl Packer {
    fn put_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    fn put_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    fn put_bytes(&mut self, value: &[u8]) -> Result<(), SigningError> {
        let len = u16::try_from(value.len()).map_err(|_| {
            SigningError::Encoding(format!("field of {} bytes exceeds u16 length", value.len()))
        })?;
        self.put_u16(len);
        self.buf.extend_from_slice(value);
        Ok(())
    }

    fn put_map_u32(&mut self, map: &BTreeMap<u16, u32>) {
        self.put_u16(map.len() as u16);
        for (key, value) in map {
            self.put_u16(*key);
            self.put_u32(*value);
        }
    }
}

/// RTC service section: which channel, which account, which privileges.
#[derive(Debug, Clone)]
pub struct RtcService {
    channel_name: String,
    account: String,
    privileges: BTreeMap<u16, u32>,
}

impl RtcService {
    /// `uid` 0 is encoded as an empty account, which any user may join with.
    pub fn new(channel_name: &str, uid: u32) -> Self {
        let account = if uid == 0 {
            String::new()
        } else {
            uid.to_string()
        };

        Self {
            channel_name: channel_name.to_string(),
            account,
            privileges: BTreeMap::new(),
        }
    }

    pub fn add_privilege(&mut self, privilege: RtcPrivilege, expire: u32) {
        self.privileges.insert(privilege as u16, expire);
    }

    fn pack(&self, packer: &mut Packer) -> Result<(), SigningError> {
        packer.put_u16(SERVICE_TYPE_RTC);
        packer.put_map_u32(&self.privileges);
        packer.put_bytes(self.channel_name.as_bytes())?;
        packer.put_bytes(self.account.as_bytes())
    }
}

pub struct AccessToken2 {
    app_id: String,
    app_certificate: String,
    issue_ts: u32,
    expire: u32,
    salt: u32,
    services: BTreeMap<u16, RtcService>,
}

impl AccessToken2 {
    /// `expire` is the token lifetime in seconds counted from `issue_ts`.
    pub fn new(app_id: &str, app_certificate: &str, issue_ts: u32, expire: u32, salt: u32) -> Self {
        Self {
            app_id: app_id.to_string(),
            app_certificate: app_certificate.to_string(),
            issue_ts,
            expire,
            salt,
            services: BTreeMap::new(),
        }
    }

    pub fn add_service(&mut self, service: RtcService) {
        self.services.insert(SERVICE_TYPE_RTC, service);
    }

    pub fn build(&self) -> Result<String, SigningError> {
        if !is_hex_uuid(&self.app_id) {
            return Err(SigningError::InvalidAppId);
        }
        if !is_hex_uuid(&self.app_certificate) {
            return Err(SigningError::InvalidAppCertificate);
        }

        let mut info = Packer::default();
        info.put_bytes(self.app_id.as_bytes())?;
        info.put_u32(self.issue_ts);
        info.put_u32(self.expire);
        info.put_u32(self.salt);
        info.put_u16(self.services.len() as u16);
        for service in self.services.values() {
            service.pack(&mut info)?;
        }

        let signature = hmac_sha256(&self.signing_key()?, &info.buf)?;

        let mut content = Packer::default();
        content.put_bytes(&signature)?;
        content.buf.extend_from_slice(&info.buf);

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&content.buf)?;
        let compressed = encoder.finish()?;

        Ok(format!("{}{}", VERSION, STANDARD.encode(compressed)))
    }

    fn signing_key(&self) -> Result<Vec<u8>, SigningError> {
        let key = hmac_sha256(&self.issue_ts.to_le_bytes(), self.app_certificate.as_bytes())?;
        hmac_sha256(&self.salt.to_le_bytes(), &key)
    }
}

fn hmac_sha256(key: &[u8], message: &[u8]) -> Result<Vec<u8>, SigningError> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| SigningError::Encoding(e.to_string()))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

fn is_hex_uuid(value: &str) -> bool {
    value.len() == 32 && value.chars().all(|c| c.is_ascii_hexdigit())
}
