use crate::helpers::location;
use actix_web::{App, test};
use coffee_harvest::startup::routes;

const VALID_FORM: [(&str, &str); 6] = [
    ("valor_carga_cafe", "125000"),
    ("precio_kilo_alimentacion", "300"),
    ("precio_kilo_no_alimentacion", "200"),
    ("cafe_seco", "10"),
    ("cafe_verde", "5"),
    ("cafe_colorado", "2"),
];

#[actix_web::test]
async fn index_renders_the_price_form() {
    let app = test::init_service(App::new().configure(routes)).await;

    let request = test::TestRequest::get().uri("/").to_request();
    let response = test::call_service(&app, request).await;
    assert!(response.status().is_success());

    let body = String::from_utf8(test::read_body(response).await.to_vec()).unwrap();
    for field in ["valor_carga_cafe", "cafe_seco", "cafe_verde", "cafe_colorado"] {
        assert!(body.contains(field), "form is missing `{field}`");
    }
    assert!(!body.contains("class=\"notice"));
}

#[actix_web::test]
async fn valid_form_renders_the_breakdown() {
    let app = test::init_service(App::new().configure(routes)).await;

    let request = test::TestRequest::post()
        .uri("/calcular")
        .set_form(VALID_FORM.to_vec())
        .to_request();
    let response = test::call_service(&app, request).await;
    assert!(response.status().is_success());

    let body = String::from_utf8(test::read_body(response).await.to_vec()).unwrap();
    assert!(body.contains("<th id=\"precio-total\">12650.00</th>"));
    assert!(body.contains("10000.00"));
    assert!(body.contains("2300.00"));
    assert!(body.contains("350.00"));
}

#[actix_web::test]
async fn missing_field_redirects_with_a_validation_notice() {
    let app = test::init_service(App::new().configure(routes)).await;

    for missing in 0..VALID_FORM.len() {
        let form: Vec<_> = VALID_FORM
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != missing)
            .map(|(_, pair)| *pair)
            .collect();
        let request = test::TestRequest::post()
            .uri("/calcular")
            .set_form(form.to_vec())
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status().as_u16(), 303);
        assert_eq!(location(&response), "/?aviso=datos_invalidos");
    }
}

#[actix_web::test]
async fn non_numeric_field_redirects_with_a_validation_notice() {
    let app = test::init_service(App::new().configure(routes)).await;

    let mut form = VALID_FORM;
    form[4] = ("cafe_verde", "cinco");
    let request = test::TestRequest::post()
        .uri("/calcular")
        .set_form(form.to_vec())
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(location(&response), "/?aviso=datos_invalidos");
}

#[actix_web::test]
async fn notice_is_shown_after_redirect() {
    let app = test::init_service(App::new().configure(routes)).await;

    let request = test::TestRequest::get()
        .uri("/?aviso=datos_invalidos")
        .to_request();
    let body = test::call_and_read_body(&app, request).await;
    let body = String::from_utf8(body.to_vec()).unwrap();

    assert!(body.contains("Verifica los valores numéricos."));
    assert!(body.contains("class=\"notice error\""));
}

#[actix_web::test]
async fn unknown_notice_code_is_ignored() {
    let app = test::init_service(App::new().configure(routes)).await;

    let request = test::TestRequest::get().uri("/?aviso=nada").to_request();
    let response = test::call_service(&app, request).await;
    assert!(response.status().is_success());

    let body = String::from_utf8(test::read_body(response).await.to_vec()).unwrap();
    assert!(!body.contains("class=\"notice"));
}
