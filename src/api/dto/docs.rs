//! DTO for the API documentation manifest.

use serde::Serialize;

/// Static map from symbolic route name to URL template.
///
/// This describes the public contract; it is not generated from the live
/// router.
#[derive(Debug, Serialize)]
pub struct ApiDocumentation {
    pub api_documentation_url: &'static str,
    pub comments_url: &'static str,
    pub comment_url: &'static str,
    pub comment_post_url: &'static str,
    pub posts_url: &'static str,
    pub post_url: &'static str,
    pub post_slug_url: &'static str,
    pub tags_url: &'static str,
    pub tag_url: &'static str,
    pub tag_slug_url: &'static str,
    pub users_url: &'static str,
    pub user_url: &'static str,
    pub user_slug_url: &'static str,
    pub user_email_url: &'static str,
}

/// The documented routes.
pub const API_DOCUMENTATION: ApiDocumentation = ApiDocumentation {
    api_documentation_url: "/api/",
    comments_url: "/api/comments",
    comment_url: "/api/comments/:id",
    comment_post_url: "/api/comments/post/:id",
    posts_url: "/api/posts/",
    post_url: "/api/posts/:id",
    post_slug_url: "/api/posts/slug/:slug",
    tags_url: "/api/tags/",
    tag_url: "/api/tags/:id",
    tag_slug_url: "/api/tags/slug/:slug",
    users_url: "/api/users/",
    user_url: "/api/users/:id",
    user_slug_url: "/api/users/slug/:slug",
    user_email_url: "/api/users/email/:email",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_has_fourteen_routes() {
        let json = serde_json::to_value(&API_DOCUMENTATION).unwrap();
        let map = json.as_object().unwrap();

        assert_eq!(map.len(), 14);
        assert!(map.values().all(|v| v.as_str().unwrap().starts_with("/api/")));
    }
}
