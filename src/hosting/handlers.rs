use crate::tables::Tables;
use crate::dto::*;
use crate::equity::Spot;
use crate::ranges::Grid;
use crate::ranges::Range;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

/// Mounts every route on an app. Shared by the server and its tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health)).service(
        web::scope("/api")
            .route("/preflop", web::post().to(preflop))
            .route("/flop", web::post().to(flop))
            .route("/equity", web::post().to(equity))
            .route("/ev", web::post().to(ev))
            .route("/range", web::post().to(range)),
    );
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

pub async fn preflop(tables: web::Data<Tables>, req: web::Json<GetPreflop>) -> impl Responder {
    let report = tables.preflop.report(&req.position, &req.hole_cards);
    HttpResponse::Ok().json(ApiStrategy::from(report))
}

pub async fn flop(tables: web::Data<Tables>, req: web::Json<GetFlop>) -> impl Responder {
    let report = tables.flop.report(&req.position, &req.board);
    HttpResponse::Ok().json(ApiStrategy::from(report))
}

pub async fn equity(tables: web::Data<Tables>, req: web::Json<GetEquity>) -> impl Responder {
    HttpResponse::Ok().json(ApiEquity {
        hand: req.hand.trim().to_string(),
        equity: tables.equities.get(&req.hand),
        known: tables.equities.find(&req.hand).is_some(),
    })
}

pub async fn ev(tables: web::Data<Tables>, req: web::Json<GetEv>) -> impl Responder {
    let spot = Spot::new(tables.equities.get(&req.hand), req.pot, req.bet)
        .with_fold_equity(req.fold_equity);
    match spot.validate() {
        Err(e) => HttpResponse::BadRequest().body(e),
        Ok(()) => HttpResponse::Ok().json(ApiEv::from(spot)),
    }
}

pub async fn range(tables: web::Data<Tables>, req: web::Json<GetRange>) -> impl Responder {
    let range = Range::expand(&req.range);
    let grid = Grid::new(&range, tables.equities);
    HttpResponse::Ok().json(ApiRange::from((&range, &grid)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::App;
    use actix_web::http::StatusCode;
    use actix_web::test;

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(Tables::default()))
                    .configure(routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn health_is_ok() {
        let app = app!();
        let req = test::TestRequest::get().uri("/health").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert!(body == "ok");
    }

    #[actix_web::test]
    async fn preflop_hit() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/preflop")
            .set_json(serde_json::json!({ "hole_cards": " AhKd ", "position": "BB" }))
            .to_request();
        let res: ApiStrategy = test::call_and_read_body_json(&app, req).await;
        assert!(res.found);
        assert!(res.summary == "GTO Strategies for AhKd in BB (100 BB):");
        assert!(res.lines == vec!["Raise: 60%, EV: 0.70 BB", "Call: 30%, EV: 0.40 BB", "Fold: 10%, EV: 0.00 BB"]);
        assert!(res.choices[0].action == "raise");
        assert!(res.choices[0].frequency == 0.6);
        assert!(res.best.as_deref() == Some("raise"));
        assert!(res.value.is_some_and(|v| (v - (0.42 + 0.12)).abs() < 1e-5));
    }

    #[actix_web::test]
    async fn preflop_defaults_to_small_blind() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/preflop")
            .set_json(serde_json::json!({ "hole_cards": "72o" }))
            .to_request();
        let res: ApiStrategy = test::call_and_read_body_json(&app, req).await;
        assert!(res.summary == "GTO Strategies for 72o in SB (100 BB):");
        assert!(res.choices[2].frequency == 0.8);
    }

    #[actix_web::test]
    async fn preflop_miss_is_fallback() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/preflop")
            .set_json(serde_json::json!({ "hole_cards": "QQ", "position": "SB" }))
            .to_request();
        let res: ApiStrategy = test::call_and_read_body_json(&app, req).await;
        assert!(!res.found);
        assert!(res.summary == "No strategy found. Try AhKd or 72o.");
        assert!(res.choices.is_empty());
        assert!(res.best.is_none());
        assert!(res.value.is_none());
    }

    #[actix_web::test]
    async fn flop_hit() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/flop")
            .set_json(serde_json::json!({ "board": "T72r", "position": "SB" }))
            .to_request();
        let res: ApiStrategy = test::call_and_read_body_json(&app, req).await;
        assert!(res.found);
        assert!(res.lines == vec!["Bet: 75%, EV: 1.20 BB", "Check: 25%, EV: 0.90 BB"]);
    }

    #[actix_web::test]
    async fn equity_defaults_unknown_hands() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/equity")
            .set_json(serde_json::json!({ "hand": "K7o" }))
            .to_request();
        let res: ApiEquity = test::call_and_read_body_json(&app, req).await;
        assert!(!res.known);
        assert!(res.equity == 0.5);
    }

    #[actix_web::test]
    async fn ev_uses_table_equity() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/ev")
            .set_json(serde_json::json!({ "hand": "AA", "pot": 10.0, "bet": 5.0 }))
            .to_request();
        let res: ApiEv = test::call_and_read_body_json(&app, req).await;
        let expected = 0.85 * 15. - 0.15 * 5.;
        assert!(res.equity == 0.85);
        assert!((res.ev - expected).abs() < 1e-4);
        assert!((res.blended - expected).abs() < 1e-4);
    }

    #[actix_web::test]
    async fn ev_rejects_malformed_body() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/ev")
            .set_json(serde_json::json!({ "hand": "AA", "pot": "lots" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status() == StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn ev_rejects_infinite_input() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/ev")
            .set_json(serde_json::json!({ "hand": "AA", "pot": 1e39, "bet": 5.0 }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status() == StatusCode::BAD_REQUEST);
        let body = test::read_body(res).await;
        assert!(body == "pot must be finite, got inf");
    }

    #[actix_web::test]
    async fn ev_rejects_overflowing_spot() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/ev")
            .set_json(serde_json::json!({ "hand": "AA", "pot": 3.0e38, "bet": 3.0e38 }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status() == StatusCode::BAD_REQUEST);
        let body = test::read_body(res).await;
        assert!(body == "called EV overflowed to inf");
    }

    #[actix_web::test]
    async fn range_expands_and_grids() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/range")
            .set_json(serde_json::json!({ "range": "JJ+" }))
            .to_request();
        let res: ApiRange = test::call_and_read_body_json(&app, req).await;
        assert!(res.classes == vec!["AA", "KK", "QQ", "JJ"]);
        assert!(res.combos == 24);
        assert!(res.grid[0][0] == Some(0.85));
        assert!(res.grid[12][12].is_none());
        assert!(res.shades[0][0] == Some(1.));
        assert!(res.shades[12][12].is_none());
        assert!(res.labels[0][1] == "AKs");
    }

    #[actix_web::test]
    async fn range_unknown_is_empty() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/range")
            .set_json(serde_json::json!({ "range": "nonsense" }))
            .to_request();
        let res: ApiRange = test::call_and_read_body_json(&app, req).await;
        assert!(res.classes.is_empty());
        assert!(res.combos == 0);
    }
}
