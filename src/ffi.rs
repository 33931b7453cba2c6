//! C-ABI adapter for host processes embedding the engine as a native library.
//!
//! The adapter accepts two NUL-terminated strings, runs [`analyse`], and returns
//! one heap-allocated JSON string: `{"frameworks_identified": ..., "openapi_specs":
//! ...}` on success, or `{"error": "<message>"}` on failure. It is pure
//! marshaling; none of the core's values are altered or re-derived here.
//!
//! A typical host loads the cdylib and calls it like:
//!
//! ```python
//! lib = ctypes.cdll.LoadLibrary("libopenapi_from_go.so")
//! lib.openapi_from_go_analyse.restype = ctypes.c_void_p
//! response = lib.openapi_from_go_analyse(path.encode(), contents.encode())
//! ```
//!
//! Every returned pointer must be released with [`openapi_from_go_free`].

use crate::analysis::analyse;
use log::debug;
use std::ffi::{c_char, CStr, CString};

/// Builds the `{"error": ...}` payload for a failure message.
fn error_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

/// Converts a response string into a C string pointer the host must free.
///
/// Interior NUL bytes cannot occur in serde_json output, but the fallback keeps
/// this total rather than panicking across the FFI boundary.
fn into_c_string(response: String) -> *mut c_char {
    let c_string = CString::new(response)
        .unwrap_or_else(|_| CString::new(r#"{"error":"response contained NUL byte"}"#).unwrap());
    c_string.into_raw()
}

/// Analyses a Go source file and returns the result as a JSON C string.
///
/// # Safety
///
/// `file_path` and `file_contents` must be valid NUL-terminated C strings that
/// outlive this call. The returned pointer owns its allocation and must be
/// released exactly once via [`openapi_from_go_free`].
#[no_mangle]
pub unsafe extern "C" fn openapi_from_go_analyse(
    file_path: *const c_char,
    file_contents: *const c_char,
) -> *mut c_char {
    if file_path.is_null() || file_contents.is_null() {
        return into_c_string(error_json("null pointer argument"));
    }

    let file_path = CStr::from_ptr(file_path).to_string_lossy();
    let file_contents = CStr::from_ptr(file_contents).to_string_lossy();

    debug!("FFI analyse call for: {}", file_path);

    let response = match analyse(&file_path, &file_contents) {
        Ok(analysis) => match serde_json::to_string(&analysis) {
            Ok(json) => json,
            Err(e) => error_json(&e.to_string()),
        },
        Err(e) => error_json(&e.to_string()),
    };

    into_c_string(response)
}

/// Releases a string previously returned by [`openapi_from_go_analyse`].
///
/// # Safety
///
/// `ptr` must be a pointer obtained from this library and not yet freed. Passing
/// a null pointer is a no-op.
#[no_mangle]
pub unsafe extern "C" fn openapi_from_go_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    fn call(file_path: &str, file_contents: &str) -> serde_json::Value {
        let path = CString::new(file_path).unwrap();
        let contents = CString::new(file_contents).unwrap();

        unsafe {
            let response_ptr = openapi_from_go_analyse(path.as_ptr(), contents.as_ptr());
            let response: serde_json::Value =
                serde_json::from_str(CStr::from_ptr(response_ptr).to_str().unwrap()).unwrap();
            openapi_from_go_free(response_ptr);
            response
        }
    }

    #[test]
    fn test_ffi_success_payload() {
        let source = r#"package main

import "net/http"

func main() {
	http.HandleFunc("/hello", hello)
}
"#;

        let response = call("hello.go", source);

        assert_eq!(response["frameworks_identified"]["net/http"], "http");
        assert_eq!(
            response["openapi_specs"]["static-analysis:net/http:hello.go"]["paths"]["/hello"]
                ["responses"]["default"]["description"],
            "Discovered via static analysis"
        );
        assert!(response.get("error").is_none());
    }

    #[test]
    fn test_ffi_error_payload_for_invalid_source() {
        let response = call("malformed.go", "{\"Oh no\": \"This isn't Go, it's JSON!\"}");

        assert!(response["error"].as_str().unwrap().contains("malformed.go"));
        assert!(response.get("frameworks_identified").is_none());
    }

    #[test]
    fn test_ffi_null_arguments() {
        unsafe {
            let response_ptr = openapi_from_go_analyse(std::ptr::null(), std::ptr::null());
            let response: serde_json::Value =
                serde_json::from_str(CStr::from_ptr(response_ptr).to_str().unwrap()).unwrap();
            openapi_from_go_free(response_ptr);

            assert_eq!(response["error"], "null pointer argument");
        }
    }

    #[test]
    fn test_ffi_free_accepts_null() {
        unsafe {
            openapi_from_go_free(std::ptr::null_mut());
        }
    }
}
