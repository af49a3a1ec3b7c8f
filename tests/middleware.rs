use actix_web::{
    App, HttpResponse,
    http::{StatusCode, header},
    test, web,
};

use sangihe_trip::middleware::RedirectUnauthorized;

const AUTH_SERVICE_URL: &str = "https://auth.localhost";

#[actix_web::test]
async fn unauthorized_is_redirected_to_auth_service() {
    let app = test::init_service(
        App::new()
            .wrap(RedirectUnauthorized::new(AUTH_SERVICE_URL))
            .default_service(web::to(|| async { HttpResponse::Unauthorized().finish() })),
    )
    .await;

    let req = test::TestRequest::with_uri("/trips").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        AUTH_SERVICE_URL
    );
}

#[actix_web::test]
async fn success_response_passes_through() {
    let app = test::init_service(
        App::new()
            .wrap(RedirectUnauthorized::new(AUTH_SERVICE_URL))
            .default_service(web::to(|| async { HttpResponse::Ok().finish() })),
    )
    .await;

    let req = test::TestRequest::default().to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get(header::LOCATION).is_none());
}
