use std::future::Future;

use serde::Serialize;

use crate::error::AppError;
use crate::link::RepoCoords;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("gh-image-links/", env!("CARGO_PKG_VERSION"));
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// 创建文件请求体（Contents API）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateFileRequest {
    pub message: String,
    pub branch: String,
    /// Base64 编码后的文件内容。
    pub content: String,
}

/// 仓库内容写入能力。
pub trait ContentsApi {
    /// 在 `coords` 指定的仓库中创建 `path` 文件，返回 HTTP 状态码。
    ///
    /// 只有传输层失败才返回 `Err`，非 2xx 状态码照常以 `Ok` 返回。
    fn put_file(
        &self,
        coords: &RepoCoords,
        path: &str,
        request: &CreateFileRequest,
    ) -> impl Future<Output = Result<u16, AppError>>;
}

/// 基于 `reqwest` 的 GitHub Contents API 客户端。
///
/// `token` 如有配置会原样放入 `Authorization` 头，本客户端不负责获取或刷新令牌。
pub struct GitHubContentsApi {
    client: reqwest::Client,
    api_base: String,
    token: Option<String>,
}

impl GitHubContentsApi {
    pub fn new(api_base: impl Into<String>, token: Option<String>) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Network(format!("无法创建 HTTP 客户端：{}", e)))?;

        Ok(Self {
            client,
            api_base: api_base.into(),
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    pub(crate) fn contents_url(&self, coords: &RepoCoords, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base.trim_end_matches('/'),
            coords.owner(),
            coords.repo(),
            path.trim_start_matches('/')
        )
    }
}

impl ContentsApi for GitHubContentsApi {
    async fn put_file(
        &self,
        coords: &RepoCoords,
        path: &str,
        request: &CreateFileRequest,
    ) -> Result<u16, AppError> {
        let url = self.contents_url(coords, path);
        let body = serde_json::to_vec(request)?;
        log::info!("🌐 PUT {}", url);

        let mut builder = self
            .client
            .put(&url)
            .header(reqwest::header::ACCEPT, GITHUB_ACCEPT)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(token) = &self.token {
            builder = builder.header(reqwest::header::AUTHORIZATION, format!("token {}", token));
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_connect() {
                AppError::Network(format!("无法连接：{}", e))
            } else {
                AppError::Network(format!("请求失败：{}", e))
            }
        })?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let detail = response.text().await.unwrap_or_default();
            log::debug!("Contents API 返回 {}：{}", status, detail);
        }
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    use super::*;

    /// 单次请求的本地 HTTP 服务，返回收到的完整请求文本。
    fn serve_once(status_line: &'static str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server failed");
        let addr = listener.local_addr().expect("read local addr failed");

        let server = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept failed");

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = stream.read(&mut buf).expect("read request failed");
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);

                let text = String::from_utf8_lossy(&request);
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let content_length = text[..header_end]
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if request.len() >= header_end + 4 + content_length {
                        break;
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{{}}",
                status_line
            );
            stream
                .write_all(response.as_bytes())
                .expect("write response failed");
            stream.flush().expect("flush failed");

            String::from_utf8(request).expect("request should be utf-8")
        });

        (format!("http://127.0.0.1:{}", addr.port()), server)
    }

    fn readme_body() -> CreateFileRequest {
        CreateFileRequest {
            message: "init".to_string(),
            branch: "main".to_string(),
            content: "aGk=".to_string(),
        }
    }

    #[tokio::test]
    async fn put_file_sends_put_with_token_and_json_body() {
        let (base, server) = serve_once("201 Created");
        let api = GitHubContentsApi::new(base, Some("secret".to_string()))
            .expect("client should build");
        let coords = RepoCoords::new("a", "b", "main");

        let status = api
            .put_file(&coords, "README.md", &readme_body())
            .await
            .expect("request should reach the server");
        let request = server.join().expect("server thread failed");

        assert_eq!(status, 201);
        assert_eq!(
            request.lines().next(),
            Some("PUT /repos/a/b/contents/README.md HTTP/1.1")
        );
        let lower = request.to_lowercase();
        assert!(lower.contains("authorization: token secret"));
        assert!(lower.contains("accept: application/vnd.github+json"));

        let (_, body) = request.split_once("\r\n\r\n").expect("request should have a body");
        let json: serde_json::Value = serde_json::from_str(body).expect("body should be json");
        assert_eq!(
            json,
            serde_json::json!({"message": "init", "branch": "main", "content": "aGk="})
        );
    }

    #[tokio::test]
    async fn put_file_passes_through_rejection_status() {
        let (base, server) = serve_once("422 Unprocessable Entity");
        let api = GitHubContentsApi::new(base, None).expect("client should build");
        let coords = RepoCoords::new("a", "b", "main");

        let result = api.put_file(&coords, "README.md", &readme_body()).await;
        let request = server.join().expect("server thread failed");

        assert!(matches!(result, Ok(422)));
        assert!(!request.to_lowercase().contains("authorization:"));
    }

    #[tokio::test]
    async fn put_file_reports_connection_failure_as_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server failed");
        let port = listener.local_addr().expect("read local addr failed").port();
        drop(listener);

        let api = GitHubContentsApi::new(format!("http://127.0.0.1:{port}"), None)
            .expect("client should build");
        let result = api
            .put_file(&RepoCoords::new("a", "b", "main"), "README.md", &readme_body())
            .await;

        assert!(matches!(result, Err(AppError::Network(_))));
    }

    #[test]
    fn contents_url_joins_base_and_coords() {
        let api = GitHubContentsApi::new("https://api.github.com/", None).expect("client should build");
        let coords = RepoCoords::new("a", "b", "main");
        assert_eq!(
            api.contents_url(&coords, "README.md"),
            "https://api.github.com/repos/a/b/contents/README.md"
        );
        assert_eq!(
            api.contents_url(&coords, "/img/x.png"),
            "https://api.github.com/repos/a/b/contents/img/x.png"
        );
    }

    #[test]
    fn blank_token_is_dropped() {
        let api = GitHubContentsApi::new(DEFAULT_API_BASE, Some("  ".to_string()))
            .expect("client should build");
        assert!(api.token.is_none());
    }

    #[test]
    fn request_serializes_expected_fields() {
        let request = CreateFileRequest {
            message: "m".to_string(),
            branch: "main".to_string(),
            content: "aGk=".to_string(),
        };
        let json: serde_json::Value = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"message": "m", "branch": "main", "content": "aGk="}));
    }
}
