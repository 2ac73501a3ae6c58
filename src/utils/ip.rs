//! IP 地址处理工具
//!
//! 提供统一的客户端 IP 提取功能。跟踪像素通常部署在反向代理之后，
//! 因此优先使用 X-Forwarded-For，其次 X-Real-IP，最后回退到连接对端地址。
//! 地址按原样记录，不做验证（审计用途，best-effort）。

/// 从请求头提取转发的 IP（X-Forwarded-For 或 X-Real-IP）
pub fn extract_forwarded_ip_from_headers(
    headers: &actix_web::http::header::HeaderMap,
) -> Option<String> {
    // 优先 X-Forwarded-For（取第一个，即原始客户端 IP）
    headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(|s| s.trim().to_string())
        .or_else(|| {
            // 其次 X-Real-IP
            headers
                .get("x-real-ip")
                .and_then(|h| h.to_str().ok())
                .map(String::from)
        })
}
