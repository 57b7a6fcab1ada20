//! The process-wide OpenCL entry-point table.
//!
//! Nothing is linked at build time. The first call that needs the native
//! runtime loads the system OpenCL library (or the one named by the
//! `COMPUTE_CL_LIBRARY` environment variable) and resolves every entry point
//! it exports. A table can also be installed up front with [`install`], for
//! instance when the runtime is linked statically or for testing. Whichever
//! happens first wins for the remaining lifetime of the process.

use std::env;
use std::ffi::OsStr;
use std::sync::OnceLock;
use libloading::Library;
use crate::ffi::ClFunctions;
use crate::error::{Error, Result};

/// Environment variable naming the OpenCL library to load.
pub const LIBRARY_ENV_VAR: &str = "COMPUTE_CL_LIBRARY";

#[cfg(target_os = "windows")]
const DEFAULT_LIBRARIES: &[&str] = &["OpenCL.dll"];

#[cfg(target_os = "macos")]
const DEFAULT_LIBRARIES: &[&str] = &[
    "/System/Library/Frameworks/OpenCL.framework/OpenCL",
    "libOpenCL.dylib",
];

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const DEFAULT_LIBRARIES: &[&str] = &["libOpenCL.so.1", "libOpenCL.so"];

struct Api {
    fns: ClFunctions,
    // Keeps the resolved symbols valid.
    _lib: Option<Library>,
}

static API: OnceLock<Api> = OnceLock::new();


/// Returns the installed entry-point table, loading the system OpenCL
/// library on first use.
pub fn get() -> Result<&'static ClFunctions> {
    if let Some(api) = API.get() {
        return Ok(&api.fns);
    }

    let api = load_default()?;
    Ok(&API.get_or_init(|| api).fns)
}

/// Installs `fns` as the process-wide table.
///
/// Returns `false`, leaving the current table in place, if a table was
/// already installed or loaded.
pub fn install(fns: ClFunctions) -> bool {
    let installed = API.set(Api { fns, _lib: None }).is_ok();
    if installed {
        log::debug!("Installed OpenCL entry-point table ({} of {} entry points).",
            fns.loaded_count(), crate::ffi::ENTRY_POINTS.len());
    }
    installed
}

/// Loads the library at `path` and installs its entry points.
///
/// Returns `Ok(false)` if a table was already in place, in which case the
/// library is unloaded again.
pub fn load_from<P: AsRef<OsStr>>(path: P) -> Result<bool> {
    let api = open(path.as_ref())?;
    Ok(API.set(api).is_ok())
}

/// Returns `true` once a table has been loaded or installed.
pub fn is_initialized() -> bool {
    API.get().is_some()
}

/// Returns the library names tried by [`get`], in order.
pub fn library_candidates() -> Vec<String> {
    match env::var(LIBRARY_ENV_VAR) {
        Ok(ref name) if !name.trim().is_empty() => vec![name.trim().to_owned()],
        _ => DEFAULT_LIBRARIES.iter().map(|s| s.to_string()).collect(),
    }
}

fn load_default() -> Result<Api> {
    let candidates = library_candidates();

    for name in candidates.iter() {
        match open(OsStr::new(name)) {
            Ok(api) => return Ok(api),
            Err(err) => log::debug!("Unable to load OpenCL library '{}': {}", name, err),
        }
    }

    Err(Error::LibraryNotFound(candidates))
}

fn open(path: &OsStr) -> Result<Api> {
    let lib = unsafe { Library::new(path)? };
    let fns = unsafe { ClFunctions::load(&lib) };

    if fns.clGetPlatformIDs.is_none() {
        return Err(Error::EntryPointUnavailable("clGetPlatformIDs"));
    }

    log::debug!("Loaded OpenCL library '{}' ({} of {} entry points).",
        path.to_string_lossy(), fns.loaded_count(), crate::ffi::ENTRY_POINTS.len());

    Ok(Api { fns, _lib: Some(lib) })
}
