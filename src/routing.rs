//! Application router configuration.

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    overview::get_overview_page,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_edit_transaction_page,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_overview_page))
        .route(
            endpoints::EDIT_TRANSACTION_VIEW,
            get(get_edit_transaction_page),
        )
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            put(edit_transaction_endpoint).delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        build_router,
        test_utils::{create_test_transaction, get_test_state, get_test_state_with},
        transaction::{Category, TransactionType},
    };

    fn get_test_server(state: crate::AppState) -> TestServer {
        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    fn transaction_row_count(text: &str) -> usize {
        let html = Html::parse_document(text);
        let selector = Selector::parse("tr[data-transaction-id]").unwrap();
        html.select(&selector).count()
    }

    #[tokio::test]
    async fn root_serves_overview_page() {
        let server = get_test_server(get_test_state());

        let response = server.get("/").await;

        response.assert_status_ok();
        let html = Html::parse_document(&response.text());
        let title = Selector::parse("title").unwrap();
        let title: String = html
            .select(&title)
            .next()
            .expect("want title")
            .text()
            .collect();
        assert_eq!(title, "Overview - Finance Tracker");
    }

    #[tokio::test]
    async fn created_transaction_is_listed_for_its_month() {
        let state = get_test_state();
        let server = get_test_server(state.clone());

        let response = server
            .post("/api/transactions")
            .add_query_param("redirect_url", "/?month=2024-01&category=all")
            .form(&[
                ("type", "expense"),
                ("amount", "30"),
                ("description", "Lunch"),
                ("category", "food"),
                ("date", "2024-01-10"),
            ])
            .await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(
            response.header("hx-redirect"),
            "/?month=2024-01&category=all"
        );
        assert_eq!(state.ledger.load().len(), 1);

        let page = server
            .get("/")
            .add_query_param("month", "2024-01")
            .await;
        assert_eq!(transaction_row_count(&page.text()), 1);
        assert!(page.text().contains("Lunch"));
    }

    #[tokio::test]
    async fn invalid_form_responds_with_alert() {
        let state = get_test_state();
        let server = get_test_server(state.clone());

        let response = server
            .post("/api/transactions")
            .form(&[
                ("type", "income"),
                ("amount", "30"),
                ("description", "   "),
                ("category", "salary"),
                ("date", "2024-01-10"),
            ])
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.text().contains("Missing description"));
        assert!(state.ledger.load().is_empty());
    }

    #[tokio::test]
    async fn can_edit_and_delete_transaction() {
        let transaction = create_test_transaction(
            "abc",
            TransactionType::Expense,
            30.0,
            date!(2024 - 01 - 10),
            Category::Food,
        );
        let state = get_test_state_with(&[transaction]);
        let server = get_test_server(state.clone());

        server.get("/transactions/abc/edit").await.assert_status_ok();

        server
            .put("/api/transactions/abc")
            .form(&[
                ("type", "expense"),
                ("amount", "45.5"),
                ("description", "Dinner"),
                ("category", "food"),
                ("date", "2024-01-11"),
            ])
            .await
            .assert_status(StatusCode::SEE_OTHER);

        let stored = state.ledger.load();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].amount, 45.5);
        assert_eq!(stored[0].description, "Dinner");

        server
            .delete("/api/transactions/abc")
            .await
            .assert_status(StatusCode::SEE_OTHER);
        assert!(state.ledger.load().is_empty());

        server
            .delete("/api/transactions/abc")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    fn attribute_of(text: &str, selector: &str, attribute: &str) -> String {
        let html = Html::parse_document(text);
        let selector = Selector::parse(selector).unwrap();
        html.select(&selector)
            .next()
            .unwrap_or_else(|| panic!("could not find {selector:?}"))
            .value()
            .attr(attribute)
            .unwrap_or_else(|| panic!("want attribute {attribute}"))
            .to_owned()
    }

    #[tokio::test]
    async fn can_edit_and_delete_transaction_with_slash_in_id() {
        let transaction = create_test_transaction(
            "a/b",
            TransactionType::Expense,
            30.0,
            date!(2024 - 01 - 10),
            Category::Food,
        );
        let state = get_test_state_with(&[transaction]);
        let server = get_test_server(state.clone());

        let page = server
            .get("/")
            .add_query_param("month", "2024-01")
            .await
            .text();
        let edit_url = attribute_of(&page, "tr[data-transaction-id] a", "href");
        let delete_url = attribute_of(&page, "tr[data-transaction-id] button", "hx-delete");

        let edit_page = server.get(&edit_url).await;
        edit_page.assert_status_ok();
        let update_url = attribute_of(&edit_page.text(), "form[hx-put]", "hx-put");

        server
            .put(&update_url)
            .form(&[
                ("type", "expense"),
                ("amount", "12"),
                ("description", "Snacks"),
                ("category", "food"),
                ("date", "2024-01-10"),
            ])
            .await
            .assert_status(StatusCode::SEE_OTHER);
        let stored = state.ledger.load();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id.as_str(), "a/b");
        assert_eq!(stored[0].description, "Snacks");

        server
            .delete(&delete_url)
            .await
            .assert_status(StatusCode::SEE_OTHER);
        assert!(state.ledger.load().is_empty());
    }

    #[tokio::test]
    async fn editing_missing_transaction_is_not_found() {
        let server = get_test_server(get_test_state());

        server
            .get("/transactions/missing/edit")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_paths_are_not_found() {
        let server = get_test_server(get_test_state());

        server
            .get("/does-not-exist")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn error_page_is_internal_server_error() {
        let server = get_test_server(get_test_state());

        server
            .get("/error")
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }
}
