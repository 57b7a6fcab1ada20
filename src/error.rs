//! Standard error type for compute-cl.
//!

use std::fmt;
use crate::ffi::cl_int;
use crate::types::status::{Status, StatusCode};
use crate::util::UtilError;

static SDK_DOCS_URL_PRE: &str = "https://registry.khronos.org/OpenCL/sdk/3.0/docs/man/html/";
static SDK_DOCS_URL_SUF: &str = ".html#errors";


/// compute-cl error result type.
pub type Result<T> = ::std::result::Result<T, Error>;


/// An enum one of several error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Api: A native entry point returned a non-success status:
    #[error("{0}")]
    Api(ApiError),
    // ProgramBuild:
    #[error("{0}")]
    ProgramBuild(ProgramBuildError),
    // Wrapper: A precondition checked by the safe function layer:
    #[error("{0}")]
    Wrapper(ApiWrapperError),
    // Load: The OpenCL library could not be opened:
    #[error("unable to load OpenCL library: {0}")]
    Load(#[from] libloading::Error),
    // LibraryNotFound:
    #[error("no OpenCL library found (tried: {})", .0.join(", "))]
    LibraryNotFound(Vec<String>),
    // EntryPointUnavailable: The loaded library does not export the symbol:
    #[error("OpenCL entry point '{0}' is not available in the loaded library")]
    EntryPointUnavailable(&'static str),
    // FfiNul: Ffi string conversion error:
    #[error("{0}")]
    FfiNul(#[from] ::std::ffi::NulError),
    // FromUtf8: String conversion error:
    #[error("{0}")]
    FromUtf8(#[from] ::std::string::FromUtf8Error),
    // Utf8: Borrowed string conversion error:
    #[error("{0}")]
    Utf8(#[from] ::std::str::Utf8Error),
    // Util: Info result decoding error:
    #[error("{0}")]
    Util(#[from] UtilError),
}

impl Error {
    /// Returns the error status code for `Api` variants.
    pub fn api_status(&self) -> Option<Status> {
        match *self {
            Error::Api(ref err) => err.status(),
            _ => None,
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

impl From<ProgramBuildError> for Error {
    fn from(err: ProgramBuildError) -> Self {
        Error::ProgramBuild(err)
    }
}

impl From<ApiWrapperError> for Error {
    fn from(err: ApiWrapperError) -> Self {
        Error::Wrapper(err)
    }
}


/// An OpenCL API error.
///
/// Holds the status code verbatim; codes OpenCL does not name are kept as
/// they are rather than rejected.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiError {
    code: StatusCode,
    fn_name: &'static str,
    fn_info: Option<String>,
}

impl ApiError {
    pub fn new<S: Into<String>>(errcode: cl_int, fn_name: &'static str, fn_info: Option<S>)
            -> ApiError {
        ApiError {
            code: StatusCode(errcode),
            fn_name,
            fn_info: fn_info.map(|s| s.into()),
        }
    }

    /// Returns the named status, if the code is one OpenCL defines.
    pub fn status(&self) -> Option<Status> {
        self.code.status()
    }

    /// Returns the status code exactly as the runtime reported it.
    pub fn code(&self) -> StatusCode {
        self.code
    }

    /// Returns the name of the native entry point which failed.
    pub fn fn_name(&self) -> &'static str {
        self.fn_name
    }
}

impl std::error::Error for ApiError {}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let fn_info_string = match self.fn_info {
            Some(ref fn_info) => format!("(\"{}\")", fn_info),
            None => String::new(),
        };

        write!(f, "\n\n\
            ################################ OPENCL ERROR ############################### \
            \n\nError executing function: {}{}  \
            \n\nStatus error code: {}  \
            \n\nPlease visit the following url for more information: \n\n{}{}{}  \n\n\
            ############################################################################# \n",
            self.fn_name, fn_info_string, self.code,
            SDK_DOCS_URL_PRE, self.fn_name, SDK_DOCS_URL_SUF)
    }
}

impl fmt::Debug for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self, f)
    }
}


/// An OpenCL program build error.
#[derive(Debug, thiserror::Error)]
pub enum ProgramBuildError {
    #[error("Device list is empty. Aborting build.")]
    DeviceListEmpty,
    #[error(
        "\n\n\
        ###################### OPENCL PROGRAM BUILD DEBUG OUTPUT \
        ######################\
        \n\n{0}\n\
        ########################################################\
        #######################\
        \n\n"
    )]
    BuildLog(String),
    #[error("{0}")]
    InfoResult(Box<Error>),
}


/// A precondition violated before any native call was made.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiWrapperError {
    #[error("create_context: No devices specified.")]
    CreateContextNoDevicesSpecified,
    #[error("get_device_ids: `devices_max` can not be zero.")]
    GetDeviceIdsDevicesMaxZero,
    #[error("get_platform_ids: No platforms found after waiting {0} seconds for the \
        platform list to become available.")]
    PlatformListUnavailable(u64),
    #[error("No platforms found.")]
    NoPlatforms,
    #[error("The default platform set by the environment variable \
        'COMPUTE_CL_DEFAULT_PLATFORM_IDX' has an index ({0}) which is out of range \
        (platforms available: {1}).")]
    PlatformIndexOutOfRange(usize, usize),
    #[error("The default device type set by the environment variable \
        'COMPUTE_CL_DEFAULT_DEVICE_TYPE': ('{0}') is invalid. Valid types are: 'DEFAULT', \
        'CPU', 'GPU', 'ACCELERATOR', 'CUSTOM', and 'ALL'.")]
    InvalidDefaultDeviceType(String),
    #[error("Malformed context property list: {0}")]
    MalformedContextProperties(&'static str),
    #[error("create_buffer: Buffer length ({0}) and data length ({1}) do not match.")]
    CreateBufferDataLengthMismatch(usize, usize),
    #[error("event_status: Unknown command execution status ({0}).")]
    UnknownExecutionStatus(cl_int),
}
