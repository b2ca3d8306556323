//! Collects multipart form fields into text values and uploaded files.

use axum::extract::Multipart;
use std::collections::HashMap;

use crate::server::{error::AppError, model::upload::UploadedFile};

/// Fields of a multipart form, keyed by field name. A repeated field keeps its last value.
#[derive(Debug, Default)]
pub struct MultipartFields {
    text: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl MultipartFields {
    /// Reads the whole multipart body.
    ///
    /// Fields carrying a file name are treated as uploads. An upload without content
    /// is skipped, so an empty file counts as no file.
    ///
    /// # Arguments
    /// - `multipart` - The request's multipart extractor
    ///
    /// # Returns
    /// - `Ok(MultipartFields)` - All fields of the body
    /// - `Err(AppError::MultipartErr)` - The body is not valid multipart
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut fields = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match field.file_name().map(base_name) {
                Some(file_name) => {
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await?.to_vec();
                    if bytes.is_empty() {
                        continue;
                    }
                    fields.files.insert(
                        name,
                        UploadedFile {
                            file_name,
                            content_type,
                            bytes,
                        },
                    );
                }
                None => {
                    let value = field.text().await?;
                    fields.text.insert(name, value);
                }
            }
        }

        Ok(fields)
    }

    pub fn take_text(&mut self, name: &str) -> Option<String> {
        self.text.remove(name)
    }

    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }
}

/// Strips any directory components a client included in the file name.
fn base_name(file_name: &str) -> String {
    file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}
