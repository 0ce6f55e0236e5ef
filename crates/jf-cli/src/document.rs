use std::path::Path;

use thiserror::Error;

/// 文档交接边界的失败形态。解码失败必须显式报错返回，
/// 不得伪装成“抽取到的字段为空”的正常结果。
#[derive(Debug, Error)]
pub enum DocumentError {
    /// 二进制格式（pdf/docx 等）由外部解码环节负责，这里只收纯文本
    #[error("不支持的文档格式 .{0}，请先转换为纯文本（.txt/.md）")]
    Unsupported(String),
    #[error("文档缺少扩展名，无法判断格式")]
    MissingExtension,
    #[error("读取文档失败: {0}")]
    Io(#[from] std::io::Error),
}

const TEXT_EXTENSIONS: &[&str] = &["txt", "md"];

/// 读取已解码的纯文本文档
///
/// 空文件是合法输入（抽取层会给出全空字段的记录）；非 UTF-8 内容
/// 由 read_to_string 以 InvalidData 报出，归入读取失败。
pub fn read_document_text(path: &Path) -> Result<String, DocumentError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or(DocumentError::MissingExtension)?
        .to_lowercase();

    if !TEXT_EXTENSIONS.contains(&extension.as_str()) {
        return Err(DocumentError::Unsupported(extension));
    }

    Ok(std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, bytes: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("jf-doc-{}-{name}", std::process::id()));
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn reads_plain_text_documents() {
        let path = temp_file("resume.txt", "姓名：张伟".as_bytes());
        assert_eq!(read_document_text(&path).unwrap(), "姓名：张伟");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn rejects_binary_formats_with_labelled_error() {
        let path = temp_file("resume.pdf", b"%PDF-1.4");
        let err = read_document_text(&path).unwrap_err();
        assert!(matches!(err, DocumentError::Unsupported(ext) if ext == "pdf"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_io_error_not_empty_text() {
        let err = read_document_text(Path::new("/no/such/file.txt")).unwrap_err();
        assert!(matches!(err, DocumentError::Io(_)));
    }

    #[test]
    fn invalid_utf8_is_surfaced() {
        let path = temp_file("bad.txt", &[0xff, 0xfe, 0x00]);
        let err = read_document_text(&path).unwrap_err();
        assert!(matches!(err, DocumentError::Io(_)));
        let _ = std::fs::remove_file(&path);
    }
}
