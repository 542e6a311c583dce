// src/api/handlers/ws.rs
use actix::{
    Actor, ActorContext, ActorFutureExt, AsyncContext, SpawnHandle, StreamHandler, WrapFuture,
};
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use std::time::Duration;
use uuid::Uuid;

use crate::api::AppState;
use crate::client::{request_sentiment, SentimentClient};
use crate::errors::ErrorClassification;
use crate::models::{SentimentRequest, SentimentResponse};
use crate::presenter::{AttemptId, FormState, ResultOrder};
use crate::validator;

/// One open page. Owns the form state and pushes a `ViewState` after every change.
pub struct FormSession {
    id: Uuid,
    client: SentimentClient,
    state: FormState,
    stage_delay: Duration,
    staged: Option<SpawnHandle>,
}

impl FormSession {
    pub fn new(client: SentimentClient, order: ResultOrder, stage_delay: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            client,
            state: FormState::new(order),
            stage_delay,
            staged: None,
        }
    }

    fn push(&self, ctx: &mut ws::WebsocketContext<Self>) {
        match serde_json::to_string(&self.state.view()) {
            Ok(json) => ctx.text(json),
            Err(e) => log::error!("Session {}: failed to encode view: {}", self.id, e),
        }
    }

    fn submit(&mut self, raw: &str, ctx: &mut ws::WebsocketContext<Self>) {
        if let Some(handle) = self.staged.take() {
            ctx.cancel_future(handle);
        }

        let attempt = self.state.begin_attempt();
        self.push(ctx);

        let text = match validator::validate(raw) {
            Ok(text) => text,
            Err(kind) => {
                log::info!("Session {}: attempt {:?} rejected: {:?}", self.id, attempt, kind);
                self.state.reject(attempt, kind);
                self.push(ctx);
                return;
            }
        };

        self.state.start_submitting(attempt);
        self.push(ctx);

        let client = self.client.clone();
        let request = async move { request_sentiment(&client, &text).await };
        ctx.spawn(
            request
                .into_actor(self)
                .map(move |outcome, act, ctx| act.finish(attempt, outcome, ctx)),
        );
    }

    fn finish(
        &mut self,
        attempt: AttemptId,
        outcome: Result<SentimentResponse, ErrorClassification>,
        ctx: &mut ws::WebsocketContext<Self>,
    ) {
        match outcome {
            Ok(response) => {
                let Some(staged) = self.state.display(attempt, &response) else {
                    return;
                };
                self.push(ctx);

                let handle = ctx.run_later(self.stage_delay, move |act, ctx| {
                    act.staged = None;
                    if act.state.apply_staged(staged) {
                        act.push(ctx);
                    }
                });
                self.staged = Some(handle);
            }
            Err(kind) => {
                if self.state.fail(attempt, kind) {
                    self.push(ctx);
                }
            }
        }
    }
}

impl Actor for FormSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        log::info!("Form session {} opened", self.id);
        self.push(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        log::info!("Form session {} closed", self.id);
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for FormSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Text(text)) => match serde_json::from_str::<SentimentRequest>(&text) {
                Ok(req) => self.submit(&req.text, ctx),
                Err(e) => log::warn!("Session {}: ignoring malformed frame: {}", self.id, e),
            },
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            _ => (),
        }
    }
}

pub async fn ws_handler(
    req: HttpRequest,
    stream: web::Payload,
    state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let presentation = &state.config.presentation;
    let session = FormSession::new(
        state.sentiment.clone(),
        presentation.order,
        presentation.stage_delay(),
    );
    ws::start(session, &req, stream)
}
