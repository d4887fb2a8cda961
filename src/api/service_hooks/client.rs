//
//  azure-devops-rest
//  api/service_hooks/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use serde::Serialize;

use super::models::*;
use crate::api::client::{RestClientBase, ServiceClient};
use crate::api::common::ApiError;
use crate::api::form_input::InputValuesQuery;
use crate::api::request::RestRequest;

const CONSUMERS: &str = "_apis/hooks/consumers/{consumerId}";
const CONSUMER_ACTIONS: &str = "_apis/hooks/consumers/{consumerId}/actions/{consumerActionId}";
const PUBLISHERS: &str = "_apis/hooks/publishers/{publisherId}";
const EVENT_TYPES: &str = "_apis/hooks/publishers/{publisherId}/eventtypes/{eventTypeId}";
const INPUT_VALUES_QUERY: &str = "_apis/hooks/publishers/{publisherId}/inputValuesQuery";
const SUBSCRIPTIONS: &str = "_apis/hooks/subscriptions/{subscriptionId}";
const SUBSCRIPTIONS_QUERY: &str = "_apis/hooks/subscriptionsquery";
const NOTIFICATIONS: &str =
    "_apis/hooks/subscriptions/{subscriptionId}/notifications/{notificationId}";
const TEST_NOTIFICATIONS: &str = "_apis/hooks/testnotifications/{notificationId}";

const V1: &str = "7.1-preview.1";

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListSubscriptionsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_action_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetNotificationsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NotificationStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<NotificationResult>,
}

/// Client for service hook publishers, consumers and subscriptions.
///
/// Hooks are served from the organization root, so this client has no
/// resource area and [`Connection::resolve_client`] always roots it at the
/// organization URL.
///
/// [`Connection::resolve_client`]: crate::api::Connection::resolve_client
#[derive(Debug, Clone)]
pub struct ServiceHooksClient {
    base: RestClientBase,
}

impl ServiceClient for ServiceHooksClient {
    const RESOURCE_AREA_ID: Option<&'static str> = None;

    fn from_base(base: RestClientBase) -> Self {
        Self { base }
    }

    fn base(&self) -> &RestClientBase {
        &self.base
    }
}

impl ServiceHooksClient {
    /// Lists consumers, optionally only those usable with `publisher_id`.
    pub async fn get_consumers(&self, publisher_id: Option<&str>) -> Result<Vec<Consumer>, ApiError> {
        let request = RestRequest::get(CONSUMERS, V1).query_param_opt("publisherId", publisher_id);
        self.base.send_list(request).await
    }

    pub async fn get_consumer(
        &self,
        consumer_id: &str,
        publisher_id: Option<&str>,
    ) -> Result<Consumer, ApiError> {
        let request = RestRequest::get(CONSUMERS, V1)
            .route("consumerId", consumer_id)
            .query_param_opt("publisherId", publisher_id);
        self.base.send_json(request).await
    }

    pub async fn get_consumer_actions(
        &self,
        consumer_id: &str,
        publisher_id: Option<&str>,
    ) -> Result<Vec<ConsumerAction>, ApiError> {
        let request = RestRequest::get(CONSUMER_ACTIONS, V1)
            .route("consumerId", consumer_id)
            .query_param_opt("publisherId", publisher_id);
        self.base.send_list(request).await
    }

    pub async fn get_consumer_action(
        &self,
        consumer_id: &str,
        consumer_action_id: &str,
        publisher_id: Option<&str>,
    ) -> Result<ConsumerAction, ApiError> {
        let request = RestRequest::get(CONSUMER_ACTIONS, V1)
            .route("consumerId", consumer_id)
            .route("consumerActionId", consumer_action_id)
            .query_param_opt("publisherId", publisher_id);
        self.base.send_json(request).await
    }

    pub async fn list_publishers(&self) -> Result<Vec<Publisher>, ApiError> {
        self.base.send_list(RestRequest::get(PUBLISHERS, V1)).await
    }

    pub async fn get_publisher(&self, publisher_id: &str) -> Result<Publisher, ApiError> {
        let request = RestRequest::get(PUBLISHERS, V1).route("publisherId", publisher_id);
        self.base.send_json(request).await
    }

    pub async fn list_event_types(
        &self,
        publisher_id: &str,
    ) -> Result<Vec<EventTypeDescriptor>, ApiError> {
        let request = RestRequest::get(EVENT_TYPES, V1).route("publisherId", publisher_id);
        self.base.send_list(request).await
    }

    pub async fn get_event_type(
        &self,
        publisher_id: &str,
        event_type_id: &str,
    ) -> Result<EventTypeDescriptor, ApiError> {
        let request = RestRequest::get(EVENT_TYPES, V1)
            .route("publisherId", publisher_id)
            .route("eventTypeId", event_type_id);
        self.base.send_json(request).await
    }

    /// Resolves the possible values of publisher inputs given the current
    /// values of the others.
    pub async fn query_input_values(
        &self,
        input_values_query: &InputValuesQuery,
        publisher_id: &str,
    ) -> Result<InputValuesQuery, ApiError> {
        let request = RestRequest::post(INPUT_VALUES_QUERY, V1)
            .route("publisherId", publisher_id)
            .json(input_values_query)?;
        self.base.send_json(request).await
    }

    pub async fn create_subscription(
        &self,
        subscription: &Subscription,
    ) -> Result<Subscription, ApiError> {
        let request = RestRequest::post(SUBSCRIPTIONS, V1).json(subscription)?;
        self.base.send_json(request).await
    }

    pub async fn get_subscription(&self, subscription_id: &str) -> Result<Subscription, ApiError> {
        let request = RestRequest::get(SUBSCRIPTIONS, V1).route("subscriptionId", subscription_id);
        self.base.send_json(request).await
    }

    pub async fn list_subscriptions(
        &self,
        options: &ListSubscriptionsOptions,
    ) -> Result<Vec<Subscription>, ApiError> {
        let request = RestRequest::get(SUBSCRIPTIONS, V1).query(options)?;
        self.base.send_list(request).await
    }

    pub async fn replace_subscription(
        &self,
        subscription: &Subscription,
        subscription_id: Option<&str>,
    ) -> Result<Subscription, ApiError> {
        let request = RestRequest::put(SUBSCRIPTIONS, V1)
            .route_opt("subscriptionId", subscription_id)
            .json(subscription)?;
        self.base.send_json(request).await
    }

    pub async fn delete_subscription(&self, subscription_id: &str) -> Result<(), ApiError> {
        let request =
            RestRequest::delete(SUBSCRIPTIONS, V1).route("subscriptionId", subscription_id);
        self.base.send_empty(request).await
    }

    pub async fn create_subscriptions_query(
        &self,
        query: &SubscriptionsQuery,
    ) -> Result<SubscriptionsQuery, ApiError> {
        let request = RestRequest::post(SUBSCRIPTIONS_QUERY, V1).json(query)?;
        self.base.send_json(request).await
    }

    pub async fn get_notifications(
        &self,
        subscription_id: &str,
        options: &GetNotificationsOptions,
    ) -> Result<Vec<Notification>, ApiError> {
        let request = RestRequest::get(NOTIFICATIONS, V1)
            .route("subscriptionId", subscription_id)
            .query(options)?;
        self.base.send_list(request).await
    }

    pub async fn get_notification(
        &self,
        subscription_id: &str,
        notification_id: i32,
    ) -> Result<Notification, ApiError> {
        let request = RestRequest::get(NOTIFICATIONS, V1)
            .route("subscriptionId", subscription_id)
            .route("notificationId", notification_id);
        self.base.send_json(request).await
    }

    /// Sends a sample event through the subscription's consumer action.
    pub async fn create_test_notification(
        &self,
        test_notification: &Notification,
        use_real_data: Option<bool>,
    ) -> Result<Notification, ApiError> {
        let request = RestRequest::post(TEST_NOTIFICATIONS, V1)
            .query_param_opt("useRealData", use_real_data)
            .json(test_notification)?;
        self.base.send_json(request).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::api::testing::MockTransport;
    use crate::api::Connection;

    fn hooks(transport: &Arc<MockTransport>) -> ServiceHooksClient {
        Connection::new("https://dev.azure.com/contoso", transport.clone())
            .unwrap()
            .client()
    }

    #[test]
    fn test_consumer_action_route() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!({"id": "httpRequest", "consumerId": "webHooks"}));

        let action = tokio_test::block_on(hooks(&transport).get_consumer_action(
            "webHooks",
            "httpRequest",
            None,
        ))
        .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(action.consumer_id.as_deref(), Some("webHooks"));
        assert_eq!(
            request.url.path(),
            "/contoso/_apis/hooks/consumers/webHooks/actions/httpRequest"
        );
        assert_eq!(request.url.query(), None);
        assert_eq!(
            request.header("accept"),
            Some("application/json;api-version=7.1-preview.1")
        );
    }

    #[test]
    fn test_list_subscriptions_drops_id_segment() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!({"count": 1, "value": [{"id": "s1", "status": "enabled"}]}));

        let subscriptions = tokio_test::block_on(hooks(&transport).list_subscriptions(
            &ListSubscriptionsOptions {
                publisher_id: Some("tfs".into()),
                event_type: Some("git.push".into()),
                ..Default::default()
            },
        ))
        .unwrap();

        let request = transport.last_request().unwrap();
        let mut pairs: Vec<(String, String)> = request.url.query_pairs().into_owned().collect();
        pairs.sort();

        assert_eq!(subscriptions[0].status, Some(SubscriptionStatus::Enabled));
        assert_eq!(request.url.path(), "/contoso/_apis/hooks/subscriptions");
        assert_eq!(
            pairs,
            vec![
                ("eventType".to_string(), "git.push".to_string()),
                ("publisherId".to_string(), "tfs".to_string()),
            ]
        );
    }

    #[test]
    fn test_notifications_filter_by_result() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!({"count": 0, "value": []}));

        tokio_test::block_on(hooks(&transport).get_notifications(
            "s1",
            &GetNotificationsOptions {
                max_results: Some(5),
                result: Some(NotificationResult::Failed),
                ..Default::default()
            },
        ))
        .unwrap();

        let request = transport.last_request().unwrap();
        let mut pairs: Vec<(String, String)> = request.url.query_pairs().into_owned().collect();
        pairs.sort();

        assert_eq!(request.url.path(), "/contoso/_apis/hooks/subscriptions/s1/notifications");
        assert_eq!(
            pairs,
            vec![
                ("maxResults".to_string(), "5".to_string()),
                ("result".to_string(), "failed".to_string()),
            ]
        );
    }

    #[test]
    fn test_test_notification_posts_body() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!({"id": 9, "status": "queued"}));

        let sent = tokio_test::block_on(hooks(&transport).create_test_notification(
            &Notification {
                details: Some(NotificationDetails {
                    event_type: Some("git.push".into()),
                    publisher_id: Some("tfs".into()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            Some(true),
        ))
        .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(sent.id, Some(9));
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url.path(), "/contoso/_apis/hooks/testnotifications");
        assert_eq!(request.url.query(), Some("useRealData=true"));
        assert_eq!(request.json_body().unwrap()["details"]["eventType"], "git.push");
    }
}
