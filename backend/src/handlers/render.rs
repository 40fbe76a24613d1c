//! Server-side rendering of components described as JSON.

use actix_web::{web, HttpResponse, Result};
use shared::{AccordionRequest, ApiSuccess, RenderedComponent};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/render").route("/accordion", web::post().to(render_accordion)));
}

async fn render_accordion(body: web::Json<AccordionRequest>) -> Result<HttpResponse> {
    let request = body.into_inner();
    log::debug!(
        "Rendering accordion with {} items ({:?})",
        request.items.len(),
        request.heading_level
    );

    let node = request.to_accordion().to_html(Vec::new(), Vec::new());
    Ok(HttpResponse::Ok().json(ApiSuccess::new(RenderedComponent::from(node))))
}
