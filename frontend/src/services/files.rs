//! Browser file handling: type checks, previews and object URLs.

use js_sys::{Function, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader, Url};

use crate::config::{ALLOWED_IMAGE_TYPES, MAX_IMAGE_SIZE};
use crate::{AppError, AppResult, ObjectUrl};

/// A file the user picked for upload.
///
/// Implemented for [`web_sys::File`]; tests provide an in-memory version.
#[allow(async_fn_in_trait)]
pub trait ImageFile: Clone + std::fmt::Debug + PartialEq + 'static {
    fn name(&self) -> String;

    /// Declared MIME type, as reported by the browser
    fn mime_type(&self) -> String;

    /// Size in bytes
    fn size(&self) -> f64;

    /// Read the whole file as a `data:` URL.
    async fn data_url(&self) -> AppResult<String>;

    /// Create an object URL pointing at the file.
    fn object_url(&self) -> AppResult<ObjectUrl>;
}

/// Check the declared type against the allow-list and the size limit.
pub fn validate_image<F: ImageFile>(file: &F) -> AppResult<()> {
    let mime = file.mime_type();
    if !ALLOWED_IMAGE_TYPES.contains(&mime.as_str()) {
        return Err(AppError::Validation(
            "❌ Solo se permiten imágenes PNG, JPG, JPEG o WEBP.".to_string(),
        ));
    }

    if file.size() > MAX_IMAGE_SIZE {
        return Err(AppError::Validation(
            "❌ La imagen supera el tamaño máximo de 10MB.".to_string(),
        ));
    }

    Ok(())
}

fn js_error(context: &str, err: JsValue) -> AppError {
    let detail = js_sys::Reflect::get(&err, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));
    AppError::File(format!("{}: {}", context, detail))
}

fn revoke_object_url(url: &str) {
    if let Err(e) = Url::revoke_object_url(url) {
        log::warn!("Could not revoke object URL {}: {:?}", url, e);
    }
}

/// Read `file` with a `FileReader` and resolve to its data URL.
pub async fn read_data_url(file: &File) -> AppResult<String> {
    let reader = FileReader::new().map_err(|e| js_error("Failed to create FileReader", e))?;

    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        let source = reader.clone();
        let on_load = Closure::once_into_js(move || {
            let result = source.result().unwrap_or(JsValue::UNDEFINED);
            let _ = resolve.call1(&JsValue::UNDEFINED, &result);
        });
        let on_error = Closure::once_into_js(move || {
            let _ = reject.call1(&JsValue::UNDEFINED, &"File could not be read".into());
        });

        reader.set_onload(Some(on_load.unchecked_ref()));
        reader.set_onerror(Some(on_error.unchecked_ref()));
    });

    reader
        .read_as_data_url(file)
        .map_err(|e| js_error("Failed to start reading", e))?;

    let result = JsFuture::from(promise)
        .await
        .map_err(|e| js_error("Failed to read file", e))?;

    result
        .as_string()
        .ok_or_else(|| AppError::File("Reader returned no data URL".to_string()))
}

impl ImageFile for File {
    fn name(&self) -> String {
        File::name(self)
    }

    fn mime_type(&self) -> String {
        self.type_()
    }

    fn size(&self) -> f64 {
        web_sys::Blob::size(self)
    }

    async fn data_url(&self) -> AppResult<String> {
        read_data_url(self).await
    }

    fn object_url(&self) -> AppResult<ObjectUrl> {
        let url = Url::create_object_url_with_blob(self)
            .map_err(|e| js_error("Failed to create object URL", e))?;
        Ok(ObjectUrl::new(url, Some(revoke_object_url)))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::Cell;

    thread_local! {
        /// Object URLs released on the current test thread.
        pub static RELEASED: Cell<usize> = const { Cell::new(0) };
    }

    pub fn released() -> usize {
        RELEASED.with(Cell::get)
    }

    fn count_release(_url: &str) {
        RELEASED.with(|count| count.set(count.get() + 1));
    }

    /// In-memory stand-in for a browser file.
    #[derive(Clone, Debug, PartialEq)]
    pub struct FakeFile {
        pub name: String,
        pub mime: String,
        pub size: f64,
    }

    impl FakeFile {
        pub fn new(name: &str, mime: &str) -> Self {
            Self {
                name: name.to_string(),
                mime: mime.to_string(),
                size: 2048.0,
            }
        }
    }

    impl ImageFile for FakeFile {
        fn name(&self) -> String {
            self.name.clone()
        }

        fn mime_type(&self) -> String {
            self.mime.clone()
        }

        fn size(&self) -> f64 {
            self.size
        }

        async fn data_url(&self) -> AppResult<String> {
            Ok(format!("data:{};base64,AAAA", self.mime))
        }

        fn object_url(&self) -> AppResult<ObjectUrl> {
            Ok(ObjectUrl::new(format!("blob:artflow/{}", self.name), Some(count_release)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeFile;
    use super::*;

    #[test]
    fn test_allowed_types_pass() {
        for mime in ["image/png", "image/jpg", "image/jpeg", "image/webp"] {
            assert!(validate_image(&FakeFile::new("a", mime)).is_ok(), "{}", mime);
        }
    }

    #[test]
    fn test_other_types_are_rejected() {
        for mime in ["image/gif", "image/svg+xml", "application/pdf", "", "IMAGE/PNG"] {
            let err = validate_image(&FakeFile::new("a", mime)).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{}", mime);
        }
    }

    #[test]
    fn test_oversized_image_is_rejected() {
        let mut file = FakeFile::new("big.png", "image/png");
        file.size = MAX_IMAGE_SIZE + 1.0;
        assert!(matches!(validate_image(&file), Err(AppError::Validation(_))));
    }
}
