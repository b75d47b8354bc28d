use validator::Validate;

#[derive(Debug, Clone, Validate)]
pub struct SendInviteRequest {
    pub sender_id: i32,
    pub target_id: i32,
    #[validate(length(max = 100))]
    pub content: String,
}
