use std::ffi::OsStr;

/// Lowercased suffix of `file_name` starting at its last '.', or the empty
/// string when the name has no '.'.
pub fn extension_key(file_name: &OsStr) -> String {
    let name = file_name.to_string_lossy();
    match name.rfind('.') {
        Some(idx) => name[idx..].to_lowercase(),
        None => String::new(),
    }
}
