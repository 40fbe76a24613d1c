//! Server-rendered page showing the sample accordions.

use actix_web::{web, HttpResponse};
use shared::gallery;
use shared::node::{self, Node};

const PATTERNFLY_CSS: &str = "https://unpkg.com/@patternfly/patternfly@4/patternfly.css";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/gallery", web::get().to(gallery_page));
}

pub async fn gallery_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_page())
}

fn render_page() -> String {
    let sections: Vec<Node> = gallery::examples()
        .into_iter()
        .map(|example| {
            node::element(
                "section",
                vec![node::attribute("class", "pf-c-page__main-section")],
                vec![
                    node::element(
                        "h2",
                        vec![node::attribute("class", "pf-c-title pf-m-lg")],
                        vec![node::text(example.title)],
                    ),
                    example.accordion.to_html(Vec::new(), Vec::new()),
                ],
            )
        })
        .collect();

    let head = node::element(
        "head",
        Vec::new(),
        vec![
            node::element("meta", vec![node::attribute("charset", "utf-8")], Vec::new()),
            node::element("title", Vec::new(), vec![node::text("Accordion gallery")]),
            node::element(
                "link",
                vec![
                    node::attribute("rel", "stylesheet"),
                    node::attribute("href", PATTERNFLY_CSS),
                ],
                Vec::new(),
            ),
        ],
    );
    let body = node::element("body", Vec::new(), sections);
    let html = node::element("html", vec![node::attribute("lang", "en")], vec![head, body]);

    format!("<!DOCTYPE html>{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header, App};

    #[test]
    fn test_page_contains_every_example() {
        let page = render_page();
        assert!(page.starts_with("<!DOCTYPE html><html lang=\"en\">"));
        for example in gallery::examples() {
            assert!(page.contains(&example.accordion.to_html(vec![], vec![]).to_html()));
        }
    }

    #[actix_web::test]
    async fn test_gallery_route_serves_html() {
        let app = actix_web::test::init_service(App::new().configure(configure)).await;
        let req = actix_web::test::TestRequest::get()
            .uri("/gallery")
            .to_request();
        let resp = actix_web::test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
    }
}
