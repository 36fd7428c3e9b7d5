use askama::Template;

use crate::pkg::internal::adaptors::jobs::spec::JobListing;

#[derive(Template)]
#[template(path = "index.html")]
pub struct Index<'a> {
    pub user: Option<&'a str>,
    pub jobs: Vec<JobListing>,
}

#[derive(Template)]
#[template(path = "signup.html")]
pub struct Signup<'a> {
    pub csrf_token: &'a str,
    pub errors: Vec<String>,
    pub username: &'a str,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct Login<'a> {
    pub csrf_token: &'a str,
    pub errors: Vec<String>,
    pub username: &'a str,
}

#[derive(Template)]
#[template(path = "post_job.html")]
pub struct PostJob<'a> {
    pub csrf_token: &'a str,
    pub errors: Vec<String>,
    pub title: &'a str,
    pub description: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(title: &str, description: &str, posted_by: &str) -> JobListing {
        JobListing {
            title: title.to_string(),
            description: description.to_string(),
            posted_by: posted_by.to_string(),
        }
    }

    #[test]
    fn test_index_renders_jobs_with_posters() {
        let page = Index {
            user: Some("alice"),
            jobs: vec![listing("Nanny needed", "Weekdays 9-5", "alice")],
        };
        let html = page.render().unwrap();
        assert!(html.contains("Nanny needed"));
        assert!(html.contains("Posted by alice"));
        assert!(html.contains("Welcome, alice"));
        assert!(html.contains("/logout"));
        assert!(html.contains("/post"));
    }

    #[test]
    fn test_index_empty_listing_renders_for_anonymous() {
        let page = Index {
            user: None,
            jobs: Vec::new(),
        };
        let html = page.render().unwrap();
        assert!(html.contains("/login"));
        assert!(html.contains("/signup"));
        assert!(!html.contains("<li>"));
    }

    #[test]
    fn test_index_escapes_job_content() {
        let page = Index {
            user: None,
            jobs: vec![listing("<script>alert(1)</script>", "desc", "mallory")],
        };
        let html = page.render().unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_forms_embed_the_csrf_token() {
        let signup = Signup {
            csrf_token: "tok123",
            errors: Vec::new(),
            username: "",
        };
        assert!(signup.render().unwrap().contains("tok123"));

        let login = Login {
            csrf_token: "tok123",
            errors: vec!["invalid username or password".to_string()],
            username: "alice",
        };
        let html = login.render().unwrap();
        assert!(html.contains("tok123"));
        assert!(html.contains("invalid username or password"));

        let post = PostJob {
            csrf_token: "tok123",
            errors: Vec::new(),
            title: "",
            description: "",
        };
        assert!(post.render().unwrap().contains("tok123"));
    }
}
