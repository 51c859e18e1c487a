//! Test utilities and shared fixtures for client modules

use serde_json::json;

use crate::client::config::ClientConfig;


/// Project hash id used across the fixtures
pub const PROJECT_HASH: &str = "3f1004b8343faabda63d441734526c854380ab89";

/// Commit payload shared by the status/history/build fixtures
pub fn commit_json() -> serde_json::Value {
    json!({
        "id": "dc395381e650f3bac18457909880829fc20e34ba",
        "url": "https://github.com/renderedtext/base-app/commit/dc395381",
        "author_name": "Rastko Jokic",
        "author_mail": "rastko@renderedtext.com",
        "message": "Update 'shoulda' gem",
        "timestamp": "2012-07-04T18:14:08+02:00"
    })
}

/// One-element response of the projects endpoint
pub fn projects_json() -> serde_json::Value {
    json!([{
        "id": 61,
        "hash_id": PROJECT_HASH,
        "name": "testapp-sphinx",
        "owner": "renderedtext",
        "created_at": "2012-09-04T11:53:22Z",
        "updated_at": "2012-09-04T12:01:17Z"
    }])
}

/// Response of the branches endpoint
pub fn branches_json() -> serde_json::Value {
    json!([{
        "id": 85,
        "name": "development",
        "branch_url": "https://semaphoreci.com/projects/61/branches/85"
    }])
}

/// Response of the branch status endpoint
pub fn branch_status_json() -> serde_json::Value {
    json!({
        "branch_name": "gem_updates",
        "branch_url": "https://semaphoreci.com/projects/61/branches/85",
        "branch_status_url": "https://semaphoreci.com/api/v1/projects/3f1004b8/gem_updates/status",
        "branch_history_url": "https://semaphoreci.com/api/v1/projects/3f1004b8/gem_updates",
        "project_name": "base-app",
        "build_url": "https://semaphoreci.com/projects/61/branches/85/builds/533",
        "build_info_url": "https://semaphoreci.com/api/v1/projects/3f1004b8/gem_updates/builds/533",
        "build_number": 533,
        "result": "passed",
        "started_at": "2012-07-09T15:23:53Z",
        "finished_at": "2012-07-09T15:30:16Z",
        "commit": commit_json()
    })
}

/// Body of the branch history endpoint; pagination travels in a header
pub fn branch_history_json() -> serde_json::Value {
    json!({
        "branch_name": "master",
        "branch_url": "https://semaphoreci.com/projects/61/branches/88",
        "branch_status_url": "https://semaphoreci.com/api/v1/projects/3f1004b8/master/status",
        "branch_history_url": "https://semaphoreci.com/api/v1/projects/3f1004b8/master",
        "project_name": "base-app",
        "builds": [{
            "build_url": "https://semaphoreci.com/projects/61/branches/88/builds/27",
            "build_info_url": "https://semaphoreci.com/api/v1/projects/3f1004b8/master/builds/27",
            "build_number": 27,
            "result": "passed",
            "started_at": "2012-07-09T15:23:53Z",
            "finished_at": "2012-07-09T15:30:16Z",
            "commit": commit_json()
        }]
    })
}

/// Serialized pagination header value
pub fn pagination_header(current_page: u32, total_pages: u32) -> String {
    json!({
        "total_entries": total_pages * 30,
        "total_pages": total_pages,
        "per_page": 30,
        "current_page": current_page,
        "first_page": current_page == 1,
        "last_page": current_page == total_pages
    })
    .to_string()
}

/// Response of the build info endpoint
pub fn build_info_json() -> serde_json::Value {
    json!({
        "project_name": "base-app",
        "branch_name": "master",
        "number": 47,
        "result": "passed",
        "created_at": "2012-07-09T15:23:33Z",
        "updated_at": "2012-07-09T15:30:20Z",
        "started_at": "2012-07-09T15:23:53Z",
        "finished_at": "2012-07-09T15:30:16Z",
        "html_url": "https://semaphoreci.com/projects/61/branches/88/builds/47",
        "commits": [commit_json()]
    })
}

/// Response of the build log endpoint
pub fn build_log_json() -> serde_json::Value {
    json!({
        "threads": [{
            "number": 1,
            "commands": [{
                "name": "bundle install --deployment --path vendor/bundle",
                "result": "0",
                "output": "Fetching gem metadata from https://rubygems.org/...",
                "duration": "00:03",
                "start_time": "2012-10-02T09:44:50Z",
                "finish_time": "2012-10-02T09:44:53Z"
            }]
        }],
        "build_info_url": "https://semaphoreci.com/api/v1/projects/3f1004b8/master/builds/47"
    })
}

/// Mock HTTP server for endpoint tests
pub struct MockServer {
    pub server: wiremock::MockServer,
}

impl MockServer {
    /// Start a new mock server
    pub async fn start() -> Self {
        let server = wiremock::MockServer::start().await;
        Self { server }
    }

    /// Get the base URL of the mock server
    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    /// Create a test config pointing to this mock server
    pub fn test_config(&self) -> ClientConfig {
        ClientConfig::new("test-token").with_base_url(self.base_url())
    }
}

#[cfg(test)]
#[allow(clippy::module_inception)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_shapes() {
        let projects = projects_json();
        assert_eq!(projects[0]["hash_id"], PROJECT_HASH);

        let status = branch_status_json();
        assert_eq!(status["build_number"], 533);
        assert_eq!(status["commit"]["author_mail"], "rastko@renderedtext.com");

        let history = branch_history_json();
        assert_eq!(history["builds"][0]["build_number"], 27);
    }

    #[test]
    fn test_pagination_header_fixture() {
        let header = pagination_header(2, 7);
        let decoded: crate::domain::Pagination = serde_json::from_str(&header).unwrap();
        assert_eq!(decoded.current_page, 2);
        assert_eq!(decoded.total_pages, 7);
        assert!(!decoded.first_page);
        assert!(!decoded.last_page);
    }
}
