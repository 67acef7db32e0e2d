/// Plain text greeting
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Greeting", body = String))
)]
pub async fn greeting() -> &'static str {
    "Hello, world!"
}
