use crate::common::error::WkmError;

/// Result alias used throughout the crate.
///
/// # Examples
///
/// ```
/// use wkm::common::result::WkmResult;
/// use wkm::common::error::WkmError;
///
/// fn active() -> WkmResult<String> {
///     Err(WkmError::NoActiveProject)
/// }
///
/// assert!(active().is_err());
/// ```
pub type WkmResult<T> = Result<T, WkmError>;

/// Conversion helpers from `Option` into `WkmResult`.
pub trait OptionExt<T> {
    /// Convert `None` into the given error.
    ///
    /// # Examples
    ///
    /// ```
    /// use wkm::common::result::{WkmResult, OptionExt};
    /// use wkm::common::error::WkmError;
    ///
    /// let none_value: Option<String> = None;
    /// let result: WkmResult<String> = none_value.ok_or_wkm(WkmError::NoActiveProject);
    /// assert!(result.is_err());
    /// ```
    fn ok_or_wkm(self, error: WkmError) -> WkmResult<T>;

    /// Convert `None` into a `RepositoryNotFound` error for the given project.
    fn ok_or_repository_not_found(
        self,
        name: impl Into<String>,
        project: impl Into<String>,
    ) -> WkmResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_wkm(self, error: WkmError) -> WkmResult<T> {
        self.ok_or(error)
    }

    fn ok_or_repository_not_found(
        self,
        name: impl Into<String>,
        project: impl Into<String>,
    ) -> WkmResult<T> {
        self.ok_or_else(|| WkmError::repository_not_found(name, project))
    }
}

/// Error mapping helpers for foreign `Result` types.
pub trait ResultExt<T, E> {
    /// Map an I/O error into a `FileSystemError` carrying the offending path.
    ///
    /// # Examples
    ///
    /// ```
    /// use wkm::common::result::{WkmResult, ResultExt};
    ///
    /// let result: Result<String, std::io::Error> = Err(std::io::Error::new(
    ///     std::io::ErrorKind::NotFound, "file not found"
    /// ));
    /// let wkm_result: WkmResult<String> = result.with_filesystem_error("read failed", None);
    /// assert!(wkm_result.is_err());
    /// ```
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> WkmResult<T>
    where
        E: Into<std::io::Error>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> WkmResult<T>
    where
        E: Into<std::io::Error>,
    {
        self.map_err(|e| WkmError::filesystem_error_with_source(message, path, e.into()))
    }
}
