use utoipa::OpenApi;

use service::records::{Attendance, Customer, MessagePair, NewRecord, Record, RecordPatch, Shift, Stats};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::records::list_records,
        crate::routes::records::get_record,
        crate::routes::records::create_record,
        crate::routes::records::update_record,
        crate::routes::records::delete_record,
        crate::routes::records::stats,
        crate::routes::records::attendance,
        crate::routes::records::customers,
        crate::routes::records::export_csv,
        crate::routes::records::message,
    ),
    components(schemas(Record, Shift, NewRecord, RecordPatch, Stats, Attendance, Customer, MessagePair)),
    tags(
        (name = "records", description = "Delivery record CRUD and notification text"),
        (name = "reports", description = "Statistics, attendance, customers and CSV export"),
        (name = "system", description = "Health")
    )
)]
pub struct ApiDoc;
