use pinyin_notation::{NotationConfig, PinyinNotation};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

const PINYIN_ABI_NUMBER: u32 = 1;

/// Returns the C ABI version number.
/// This value changes ONLY when the C ABI is broken.
#[no_mangle]
pub extern "C" fn pinyin_abi_number() -> u32 {
    PINYIN_ABI_NUMBER
}

/// Returns the library version string (UTF-8, null-terminated).
///
/// The returned pointer is valid for the lifetime of the program.
#[no_mangle]
pub extern "C" fn pinyin_version_string() -> *const c_char {
    static VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");
    VERSION.as_ptr() as *const c_char
}

/// C API function `pinyin_new`.
///
/// # Safety
/// The returned instance must be released with `pinyin_delete`.
#[no_mangle]
pub extern "C" fn pinyin_new() -> *mut PinyinNotation {
    Box::into_raw(Box::new(PinyinNotation::new()))
}

/// C API function `pinyin_delete`.
///
/// # Safety
/// `instance` must come from `pinyin_new` and must not be used afterwards.
#[no_mangle]
pub extern "C" fn pinyin_delete(instance: *mut PinyinNotation) {
    if !instance.is_null() {
        unsafe {
            let _ = Box::from_raw(instance);
        }
    }
}

/// C API function `pinyin_get_parallel`.
///
/// # Safety
/// `instance` must be NULL or a live pointer from `pinyin_new`.
#[no_mangle]
pub extern "C" fn pinyin_get_parallel(instance: *const PinyinNotation) -> bool {
    match unsafe { instance.as_ref() } {
        Some(notation) => notation.get_parallel(),
        None => false,
    }
}

/// C API function `pinyin_set_parallel`.
///
/// # Safety
/// `instance` must be NULL or a live pointer from `pinyin_new`.
#[no_mangle]
pub extern "C" fn pinyin_set_parallel(instance: *mut PinyinNotation, is_parallel: bool) {
    if let Some(notation) = unsafe { instance.as_mut() } {
        notation.set_parallel(is_parallel);
    }
}

/// C API function `pinyin_get_mandarin`.
///
/// # Safety
/// `instance` must be NULL or a live pointer from `pinyin_new`.
#[no_mangle]
pub extern "C" fn pinyin_get_mandarin(instance: *const PinyinNotation) -> bool {
    match unsafe { instance.as_ref() } {
        Some(notation) => notation.get_mandarin(),
        None => false,
    }
}

/// C API function `pinyin_set_mandarin`.
///
/// # Safety
/// `instance` must be NULL or a live pointer from `pinyin_new`.
#[no_mangle]
pub extern "C" fn pinyin_set_mandarin(instance: *mut PinyinNotation, mandarin: bool) {
    if let Some(notation) = unsafe { instance.as_mut() } {
        notation.set_mandarin(mandarin);
    }
}

/// C API function `pinyin_convert`.
///
/// Returns a heap string to release with `pinyin_string_free`. An unknown
/// config name returns the error message instead and sets the last error.
///
/// # Safety
/// Pointers passed from C must be valid for the duration of the call.
#[no_mangle]
pub extern "C" fn pinyin_convert(
    instance: *const PinyinNotation,
    input: *const c_char,
    config: *const c_char,
) -> *mut c_char {
    if config.is_null() {
        PinyinNotation::set_last_error("Invalid argument: config is NULL");
        return ptr::null_mut();
    }

    convert_core(instance, input, || {
        let config_str = unsafe { CStr::from_ptr(config) }
            .to_str()
            .map_err(|_| "Invalid UTF-8 config string".to_string())?;
        NotationConfig::try_from(config_str).map_err(|err| err.to_string())
    })
}

/// C API function `pinyin_convert_cfg`, taking a numeric config id.
///
/// # Safety
/// Pointers passed from C must be valid for the duration of the call.
#[no_mangle]
pub extern "C" fn pinyin_convert_cfg(
    instance: *const PinyinNotation,
    input: *const c_char,
    config: u32,
) -> *mut c_char {
    convert_core(instance, input, || {
        NotationConfig::from_ffi(config).ok_or_else(|| format!("Invalid config: {}", config))
    })
}

// ------ Core Shared Helpers ------

#[inline]
fn make_c_string_or_fallback(s: &str, fallback: &'static str) -> *mut c_char {
    CString::new(s)
        .or_else(|_| CString::new(fallback))
        .unwrap_or_default()
        .into_raw()
}

#[inline]
fn fail(msg: &str) -> *mut c_char {
    PinyinNotation::set_last_error(msg);
    make_c_string_or_fallback(msg, "Error")
}

#[inline]
fn decode_utf8<'a>(ptr_: *const c_char) -> Result<&'a str, *mut c_char> {
    let s = unsafe { CStr::from_ptr(ptr_) };
    s.to_str().map_err(|_| fail("Invalid UTF-8 input"))
}

/// Shared core: resolve config -> convert -> return heap C string.
/// `resolve_cfg` returns Ok(cfg) for success, Err(error_message) for user-facing errors.
#[inline]
fn convert_core<F>(
    instance: *const PinyinNotation,
    input: *const c_char,
    resolve_cfg: F,
) -> *mut c_char
where
    F: FnOnce() -> Result<NotationConfig, String>,
{
    if instance.is_null() || input.is_null() {
        PinyinNotation::set_last_error("Invalid argument: instance/input is NULL");
        return ptr::null_mut();
    }

    let notation = unsafe { &*instance };

    let input_str = match decode_utf8(input) {
        Ok(v) => v,
        Err(p) => return p,
    };

    let cfg = match resolve_cfg() {
        Ok(c) => c,
        Err(msg) => return fail(&msg),
    };

    let result = notation.convert_with_config(input_str, cfg);

    // Only a real success clears the last error.
    match CString::new(result) {
        Ok(cstr) => {
            PinyinNotation::clear_last_error();
            cstr.into_raw()
        }
        Err(_) => fail("Output contains NUL byte"),
    }
}

/// C API function `pinyin_string_free`.
///
/// # Safety
/// `ptr` must be NULL or a string returned by `pinyin_convert*`.
#[no_mangle]
pub extern "C" fn pinyin_string_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        };
    }
}

/// C API function `pinyin_last_error`.
///
/// Always returns a heap string, "No error" when nothing is recorded.
/// Release it with `pinyin_error_free`.
#[no_mangle]
pub extern "C" fn pinyin_last_error() -> *mut c_char {
    let msg: String = match PinyinNotation::get_last_error() {
        Some(err) if !err.is_empty() => err,
        _ => "No error".to_string(),
    };

    make_c_string_or_fallback(&msg, "No error")
}

/// C API function `pinyin_clear_last_error`.
#[no_mangle]
pub extern "C" fn pinyin_clear_last_error() {
    PinyinNotation::clear_last_error();
}

/// C API function `pinyin_error_free`.
///
/// # Safety
/// `ptr` must be NULL or a string returned by `pinyin_last_error`.
#[no_mangle]
pub extern "C" fn pinyin_error_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}

// ------ Config Enum Helpers ------

/// C API function `pinyin_config_name_to_id`.
///
/// Writes the id of a config name (case-insensitive) to `out_id` and returns
/// 1, or returns 0 when the name is unknown.
///
/// # Safety
/// Pointers passed from C must be valid for the duration of the call.
#[no_mangle]
pub extern "C" fn pinyin_config_name_to_id(name_utf8: *const c_char, out_id: *mut u32) -> u8 {
    if name_utf8.is_null() || out_id.is_null() {
        return 0;
    }

    let name = unsafe { CStr::from_ptr(name_utf8) };
    let Ok(name) = name.to_str() else {
        return 0;
    };

    match NotationConfig::try_from(name) {
        Ok(cfg) => {
            unsafe {
                *out_id = cfg.to_ffi();
            }
            1
        }
        Err(_) => 0,
    }
}

/// C API function `pinyin_config_id_to_name`.
///
/// Returns a static string, or NULL for an unknown id. Do not free it.
#[no_mangle]
pub extern "C" fn pinyin_config_id_to_name(id: u32) -> *const c_char {
    // Static NUL-terminated names, safe to hand out forever.
    let name: &'static [u8] = match NotationConfig::from_ffi(id) {
        Some(NotationConfig::ToneToDiacritic) => b"p2d\0",
        Some(NotationConfig::DiacriticToTone) => b"d2p\0",
        Some(NotationConfig::PinyinToZhuyin) => b"p2z\0",
        Some(NotationConfig::PinyinToIpa) => b"p2i\0",
        Some(NotationConfig::ZhuyinToIpa) => b"z2i\0",
        Some(NotationConfig::IpaShorthand) => b"ipa\0",
        None => return ptr::null(),
    };
    name.as_ptr() as *const c_char
}

// ------ C API Tests ------
