//! App Router

use salvo::Router;

use crate::{bookings, healthcheck, index, kpis};

pub(crate) fn app_router() -> Router {
    Router::new()
        .get(index::handler)
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(
            Router::with_path("api")
                .push(
                    Router::with_path("orders")
                        .get(bookings::index::handler)
                        .post(bookings::create::handler)
                        .push(
                            Router::with_path("{id}")
                                .get(bookings::get::handler)
                                .put(bookings::update::handler),
                        ),
                )
                .push(Router::with_path("kpis").get(kpis::handler)),
        )
}
