use actix_web::{
    body::MessageBody,
    http::{header::ContentType, StatusCode},
    test,
    test::TestRequest,
    web::ServiceConfig,
    App,
};
use log::debug;

use crate::{
    auth::USER_ID_HEADER,
    routes::{CALCULATIONS, ORDERS},
};

pub async fn send_request(req: TestRequest, configure: impl FnOnce(&mut ServiceConfig)) -> (StatusCode, String) {
    let app = App::new().configure(configure);
    let service = test::init_service(app).await;
    debug!("Making request");
    let (_, res) = test::call_service(&service, req.to_request()).await.into_parts();
    let status = res.status();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    (status, body)
}

pub fn calculations_request(user_id: Option<&str>, body: Option<&str>) -> TestRequest {
    let mut req = TestRequest::get().uri(CALCULATIONS);
    if let Some(user_id) = user_id {
        req = req.insert_header((USER_ID_HEADER, user_id));
    }
    if let Some(body) = body {
        req = req.insert_header(ContentType::json()).set_payload(body.to_string());
    }
    req
}

pub fn order_request(user_id: &str, mail_address: &str, body: &str) -> TestRequest {
    TestRequest::post()
        .uri(&format!("{ORDERS}?mailAddress={mail_address}"))
        .insert_header((USER_ID_HEADER, user_id))
        .insert_header(ContentType::json())
        .set_payload(body.to_string())
}
