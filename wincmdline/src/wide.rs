pub fn to_wide(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

#[cfg(windows)]
pub fn os_to_wide(text: &std::ffi::OsStr) -> Vec<u16> {
    use std::os::windows::ffi::OsStrExt;
    text.encode_wide().collect()
}

pub fn display_lossy(units: &[u16]) -> String {
    String::from_utf16_lossy(units)
}
