/// File received in a multipart field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Client-supplied file name, without any directory component.
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    /// Object name used when storing the upload: `<uuid>_<file name>`.
    pub fn unique_name(&self) -> String {
        format!("{}_{}", uuid::Uuid::new_v4(), self.file_name)
    }
}
