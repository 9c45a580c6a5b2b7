use grocery_order_engine::traits::{MailTransport, MailTransportError, OrderStreamError, OrderStreamProducer};
use mockall::mock;

mock! {
    pub MailClient {}
    impl MailTransport for MailClient {
        async fn send_message(
            &self,
            recipient_name: &str,
            recipient_address: &str,
            include_details: bool,
            subject: &str,
            body: &str,
        ) -> Result<String, MailTransportError>;
    }
}

mock! {
    pub StreamProducer {}
    impl OrderStreamProducer for StreamProducer {
        async fn dispatch(&self, message: String) -> Result<(), OrderStreamError>;
    }
}
