use super::*;
use crate::config::OutboundTimeouts;

#[test]
fn parses_files_page() {
    let json = r#"{
      "nextPageToken": "tok-2",
      "files": [
        {"id": "1AbC", "name": "hero.jpg", "mimeType": "image/jpeg", "thumbnailLink": "https://lh3.googleusercontent.com/t1"},
        {"id": "2DeF", "name": "Proofs", "mimeType": "application/vnd.google-apps.folder"}
      ]
    }"#;
    let page = parse_files_page(json).unwrap();
    assert_eq!(page.next_page_token.as_deref(), Some("tok-2"));
    assert_eq!(page.files.len(), 2);
    assert!(page.files[0].is_image());
    assert!(!page.files[1].is_image());
    assert_eq!(page.files[1].web_content_link, None);
}

#[test]
fn empty_object_is_an_empty_last_page() {
    let page = parse_files_page("{}").unwrap();
    assert!(page.files.is_empty());
    assert!(page.next_page_token.is_none());
}

#[test]
fn folder_id_validation() {
    assert_eq!(validate_folder_id(" 1a2B-c_3 ").unwrap(), "1a2B-c_3");
    assert!(matches!(validate_folder_id(""), Err(GalleryError::InvalidInput(_))));
    assert!(matches!(validate_folder_id("abc' or '1'='1"), Err(GalleryError::InvalidInput(_))));
}

#[test]
fn folder_query_shape() {
    assert_eq!(folder_query("abc"), "'abc' in parents and trashed=false");
}

#[tokio::test]
async fn unconfigured_drive_yields_empty_list() {
    let client = GalleryClient::new(OutboundTimeouts { request_secs: 1, connect_secs: 1 }, None, None).unwrap();
    assert!(client.drive_files("abc123").await.unwrap().is_empty());
    assert!(matches!(client.drive_files("../etc").await, Err(GalleryError::InvalidInput(_))));
}
