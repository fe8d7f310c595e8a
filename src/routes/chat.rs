use actix_web::{web, HttpResponse, Responder};

use crate::models::chat::{ChatReply, ChatRequest};
use crate::services::chatbot_service::generate_response;

/*
    /api/chat
*/
pub async fn chat(input: web::Json<ChatRequest>) -> impl Responder {
    let reply = generate_response(&input.message);
    HttpResponse::Ok().json(ChatReply { reply })
}
