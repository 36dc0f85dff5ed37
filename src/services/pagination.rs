//! 分页

/// 每页题目数量
pub const QUESTIONS_PER_PAGE: usize = 10;

/// 解析页码参数
///
/// 缺失、非数字或非正数时返回第 1 页；超出范围的正整数按 `usize::MAX` 处理
pub fn page_from_param(raw: Option<&str>) -> usize {
    let Some(value) = raw.map(str::trim) else {
        return 1;
    };
    match value.parse::<i64>() {
        Ok(page) if page > 0 => usize::try_from(page).unwrap_or(usize::MAX),
        Ok(_) => 1,
        Err(_) if is_positive_integer(value) => usize::MAX,
        Err(_) => 1,
    }
}

fn is_positive_integer(value: &str) -> bool {
    let digits = value.strip_prefix('+').unwrap_or(value);
    !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && digits.bytes().any(|b| b != b'0')
}

/// 截取第 `page` 页（从 1 开始）
///
/// 起始位置超出序列长度时返回空切片，调用方据此判断页面不存在
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.max(1).saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
