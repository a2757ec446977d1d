use base64::{Engine as _, engine::general_purpose};

use crate::link::RepoCoords;
use crate::notify::{LoadingIndicator, Notifier};

use super::{ContentsApi, CreateFileRequest};

pub const README_PATH: &str = "README.md";
pub const INIT_COMMIT_MESSAGE: &str = "Init repos via PicX(https://github.com/XPoet/picx)";
const LOADING_TEXT: &str = "正在初始化仓库...";
const INIT_FAILED: &str = "仓库初始化失败";
const CREATED: u16 = 201;

pub const WELCOME_DOCUMENT: &str = "
# Welcome to use PicX

[PicX](https://github.com/XPoet/picx) is a simple and powerful image hosting tool. It supports image hosting services via GitHub repository.

PicX is completely open source, and you can use it for free.

If you like it, please give it a star on [GitHub](https://github.com/XPoet/picx).

Thank you for your support!
";

/// 初始化结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// 服务端返回 201，README 已创建。
    Initialized,
    /// 非 201 响应或请求失败，已提示用户。
    Failed,
}

/// 构造写入 README 的请求体。
pub fn readme_request(branch: &str) -> CreateFileRequest {
    CreateFileRequest {
        message: INIT_COMMIT_MESSAGE.to_string(),
        branch: branch.to_string(),
        content: general_purpose::STANDARD.encode(WELCOME_DOCUMENT),
    }
}

/// 在空仓库中创建 `README.md` 完成初始化。
///
/// 成功时只关闭加载状态；失败时发出一条错误提示，加载状态不做处理。
pub async fn initialize_repository<A: ContentsApi>(
    api: &A,
    coords: &RepoCoords,
    notifier: &dyn Notifier,
    loading: &dyn LoadingIndicator,
) -> InitOutcome {
    loading.service(LOADING_TEXT);

    let request = readme_request(coords.branch());
    match api.put_file(coords, README_PATH, &request).await {
        Ok(CREATED) => {
            log::info!(
                "✅ 仓库初始化完成 - {}/{}@{}",
                coords.owner(),
                coords.repo(),
                coords.branch()
            );
            loading.close();
            InitOutcome::Initialized
        }
        Ok(status) => {
            log::warn!("仓库初始化失败 - HTTP {}", status);
            notifier.error(INIT_FAILED);
            InitOutcome::Failed
        }
        Err(err) => {
            log::warn!("仓库初始化失败 - {}", err);
            notifier.error(INIT_FAILED);
            InitOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::error::AppError;

    struct FakeApi {
        response: Result<u16, String>,
        calls: Mutex<Vec<(RepoCoords, String, CreateFileRequest)>>,
    }

    impl FakeApi {
        fn status(status: u16) -> Self {
            Self {
                response: Ok(status),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                response: Err(message.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl ContentsApi for FakeApi {
        async fn put_file(
            &self,
            coords: &RepoCoords,
            path: &str,
            request: &CreateFileRequest,
        ) -> Result<u16, AppError> {
            self.calls
                .lock()
                .unwrap()
                .push((coords.clone(), path.to_string(), request.clone()));
            self.response.clone().map_err(AppError::Network)
        }
    }

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<String>>,
    }

    impl Recorder {
        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }
    }

    impl Notifier for Recorder {
        fn success(&self, message: &str) {
            self.events.lock().unwrap().push(format!("success:{message}"));
        }

        fn warning(&self, message: &str) {
            self.events.lock().unwrap().push(format!("warning:{message}"));
        }

        fn error(&self, message: &str) {
            self.events.lock().unwrap().push(format!("error:{message}"));
        }
    }

    impl LoadingIndicator for Recorder {
        fn service(&self, text: &str) {
            self.events.lock().unwrap().push(format!("loading:{text}"));
        }

        fn close(&self) {
            self.events.lock().unwrap().push("close".to_string());
        }
    }

    fn coords() -> RepoCoords {
        RepoCoords::new("a", "b", "main")
    }

    #[tokio::test]
    async fn created_closes_loading_silently() {
        let api = FakeApi::status(201);
        let notifier = Recorder::default();
        let loading = Recorder::default();

        let outcome = initialize_repository(&api, &coords(), &notifier, &loading).await;

        assert_eq!(outcome, InitOutcome::Initialized);
        assert_eq!(loading.events(), vec!["loading:正在初始化仓库...", "close"]);
        assert!(notifier.events().is_empty());
    }

    #[tokio::test]
    async fn non_created_status_reports_one_error() {
        let api = FakeApi::status(422);
        let notifier = Recorder::default();
        let loading = Recorder::default();

        let outcome = initialize_repository(&api, &coords(), &notifier, &loading).await;

        assert_eq!(outcome, InitOutcome::Failed);
        assert_eq!(notifier.events(), vec!["error:仓库初始化失败"]);
        assert_eq!(loading.events(), vec!["loading:正在初始化仓库..."]);
    }

    #[tokio::test]
    async fn transport_error_collapses_to_same_message() {
        let api = FakeApi::failing("connection refused");
        let notifier = Recorder::default();
        let loading = Recorder::default();

        let outcome = initialize_repository(&api, &coords(), &notifier, &loading).await;

        assert_eq!(outcome, InitOutcome::Failed);
        assert_eq!(notifier.events(), vec!["error:仓库初始化失败"]);
    }

    #[tokio::test]
    async fn sends_single_readme_request_on_branch() {
        let api = FakeApi::status(201);
        let recorder = Recorder::default();

        initialize_repository(&api, &coords(), &recorder, &recorder).await;

        let calls = api.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (called_coords, path, request) = &calls[0];
        assert_eq!(called_coords, &coords());
        assert_eq!(path, README_PATH);
        assert_eq!(request.branch, "main");
        assert_eq!(request.message, INIT_COMMIT_MESSAGE);

        let decoded = general_purpose::STANDARD
            .decode(&request.content)
            .expect("content should be base64");
        assert_eq!(String::from_utf8(decoded).unwrap(), WELCOME_DOCUMENT);
    }
}
