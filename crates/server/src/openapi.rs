use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CustomerDoc { pub id: i64, pub name: String, pub email: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::customers::list,
        crate::routes::customers::get,
        crate::routes::customers::create,
        crate::routes::customers::update,
        crate::routes::customers::delete,
        crate::routes::customers::get_by_email,
    ),
    components(
        schemas(
            HealthResponse,
            CustomerDoc,
            crate::routes::customers::CreateCustomerInput,
            crate::routes::customers::UpdateCustomerInput,
        )
    ),
    tags(
        (name = "health"),
        (name = "customer", description = "Customer management APIs")
    )
)]
pub struct ApiDoc;
