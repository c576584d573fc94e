//! 필드 경로 해석 모듈
//!
//! `a.b.c` 형식의 점 구분 경로로 레코드 안의 중첩 값을 찾습니다.

use serde_json::{Map, Value};

/// 중첩 필드 값 가져오기 (예: "SourceMetadata.Data.Github.email")
///
/// 마지막을 제외한 모든 경로 조각은 객체여야 합니다. 중간 키가 없거나 객체가 아니면
/// `None`을 반환합니다. 마지막 키가 존재하면 값이 `null`이어도 `Some`입니다.
///
/// # Examples
/// ```
/// use jsearch::field::resolve;
/// use serde_json::json;
///
/// let record = json!({"a": {"b": {"c": null}}});
/// let map = record.as_object().unwrap();
/// assert_eq!(resolve(map, "a.b.c"), Some(&json!(null)));
/// assert_eq!(resolve(map, "a.x.c"), None);
/// ```
pub fn resolve<'a>(record: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut parts = path.split('.').peekable();
    let mut current = record;

    while let Some(part) = parts.next() {
        let value = current.get(part)?;
        if parts.peek().is_none() {
            return Some(value);
        }
        current = value.as_object()?;
    }

    None
}
