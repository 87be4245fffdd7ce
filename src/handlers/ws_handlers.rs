use actix_web::{HttpRequest, HttpResponse, web};
use actix_ws::Message;

use crate::presentation::Presenter;

/// WebSocket that tells a waiting loading page when budget data is ready.
/// Sends one `{"type":"budget_ready"}` message, then closes.
pub async fn ws_connect(
    req: HttpRequest,
    body: web::Payload,
    presenter: web::Data<Presenter>,
) -> Result<HttpResponse, actix_web::Error> {
    let (response, mut ws_session, mut msg_stream) = actix_ws::handle(&req, body)?;
    let presenter = presenter.get_ref().clone();

    actix_web::rt::spawn(async move {
        let ready = presenter.ready();
        tokio::pin!(ready);
        loop {
            tokio::select! {
                data = &mut ready => {
                    if data.is_some() {
                        let msg = serde_json::json!({ "type": "budget_ready" });
                        let _ = ws_session.text(msg.to_string()).await;
                    }
                    break;
                }
                Some(Ok(msg)) = msg_stream.recv() => {
                    match msg {
                        Message::Ping(bytes) => {
                            if ws_session.pong(&bytes).await.is_err() {
                                return;
                            }
                        }
                        Message::Close(_) => return,
                        _ => {}
                    }
                }
                else => return,
            }
        }
        let _ = ws_session.close(None).await;
    });

    Ok(response)
}
