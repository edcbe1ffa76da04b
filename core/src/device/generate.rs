// ## File: `src/device/generate.rs`

//! Random identity defaults, shaped like the real app's values
//! (device id `6e4e81ec362f7630`, ad id `4071e87a-08cc-4ee3-9922-0577f83c73b2`).

use chrono::{Local, Offset};
use rand::RngCore;
use uuid::Uuid;

/// 8 random bytes as 16 lowercase hex chars.
pub fn generate_device_id() -> String {
    let mut bytes = [0u8; 8];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Random UUID v4, hyphenated lowercase.
pub fn generate_ad_id() -> String {
    Uuid::new_v4().to_string()
}

/// Local UTC offset in seconds.
pub fn local_offset_seconds() -> i32 {
    Local::now().offset().fix().local_minus_utc()
}

/// Short zone label for an offset: `UTC`, `GMT+7`, `GMT-3:30`.
pub fn timezone_label(offset_seconds: i32) -> String {
    if offset_seconds == 0 {
        return "UTC".to_string();
    }
    let sign = if offset_seconds < 0 { '-' } else { '+' };
    let abs = offset_seconds.unsigned_abs();
    let hours = abs / 3600;
    let minutes = (abs % 3600) / 60;
    if minutes == 0 {
        format!("GMT{}{}", sign, hours)
    } else {
        format!("GMT{}{}:{:02}", sign, hours, minutes)
    }
}

/// Timezone header default for this host.
pub fn local_timezone_label() -> String {
    timezone_label(local_offset_seconds())
}
