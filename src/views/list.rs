//! Paginated entity list

use std::sync::Arc;

use log::{debug, error};

use super::card::Card;
use super::pagination::PaginationControl;
use super::resource::Resource;
use super::tracker::RequestTracker;
use crate::client::models::EntityId;
use crate::client::{DashboardApi, FIRST_PAGE, PageRequest};

/// Fetch state of a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListStatus {
    Loading,
    Failed(String),
    Ready,
}

/// One page of a collection with its pagination control.
///
/// Every page change fetches from the API; nothing is cached.
pub struct EntityList<R: Resource> {
    resource: R,
    api: Arc<dyn DashboardApi>,
    tracker: RequestTracker,
    page: u32,
    status: ListStatus,
    items: Vec<R::Entity>,
    pagination: Option<PaginationControl>,
    total_items: u64,
}

impl<R: Resource> EntityList<R> {
    /// Create an unmounted list positioned on `page`.
    pub fn new(resource: R, api: Arc<dyn DashboardApi>, page: u32) -> Self {
        Self {
            resource,
            api,
            tracker: RequestTracker::new(),
            page: page.max(FIRST_PAGE),
            status: ListStatus::Loading,
            items: Vec::new(),
            pagination: None,
            total_items: 0,
        }
    }

    /// Create the list and fetch its first page.
    pub async fn mount(resource: R, api: Arc<dyn DashboardApi>, page: u32) -> Self {
        let mut list = Self::new(resource, api, page);
        list.refresh().await;
        list
    }

    /// Re-fetch the current page.
    pub async fn refresh(&mut self) {
        let ticket = self.tracker.begin();
        self.status = ListStatus::Loading;

        let result = self
            .resource
            .fetch_page(self.api.as_ref(), PageRequest::new(self.page))
            .await;

        if !self.tracker.is_current(ticket) {
            debug!("Discarding stale {} page {}", R::PLURAL, self.page);
            return;
        }

        match result {
            Ok(page) => {
                self.page = page.current_page.max(FIRST_PAGE);
                self.pagination = Some(PaginationControl::new(page.current_page, page.total_pages));
                self.total_items = page.total_items;
                self.items = page.data;
                self.status = ListStatus::Ready;
            }
            Err(e) => {
                error!("Error fetching {}: {}", R::PLURAL, e);
                self.status = ListStatus::Failed(format!(
                    "Failed to fetch {}. Please try again later.",
                    R::PLURAL
                ));
            }
        }
    }

    /// Move to `page` and fetch it.
    pub async fn go_to(&mut self, page: u32) {
        self.page = page.max(FIRST_PAGE);
        self.refresh().await;
    }

    /// Follow the "next" button. Returns false when it is disabled.
    pub async fn next(&mut self) -> bool {
        let mut target = None;
        if let Some(control) = self.pagination {
            control.click_next(|p| target = Some(p));
        }
        self.follow(target).await
    }

    /// Follow the "previous" button. Returns false when it is disabled.
    pub async fn previous(&mut self) -> bool {
        let mut target = None;
        if let Some(control) = self.pagination {
            control.click_previous(|p| target = Some(p));
        }
        self.follow(target).await
    }

    async fn follow(&mut self, target: Option<u32>) -> bool {
        match target {
            Some(page) => {
                self.go_to(page).await;
                true
            }
            None => false,
        }
    }

    /// A create dialog finished: fetch the current page again.
    pub async fn on_created(&mut self) {
        self.refresh().await;
    }

    /// A card was deleted: drop it locally without a request.
    pub fn on_deleted(&mut self, id: EntityId) {
        let resource = &self.resource;
        self.items.retain(|entity| resource.id_of(entity) != id);
    }

    /// Clone of the liveness guard, for unmounting from outside.
    pub fn handle(&self) -> RequestTracker {
        self.tracker.clone()
    }

    pub fn unmount(&self) {
        self.tracker.unmount();
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    pub fn status(&self) -> &ListStatus {
        &self.status
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn items(&self) -> &[R::Entity] {
        &self.items
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn pagination(&self) -> Option<PaginationControl> {
        self.pagination
    }

    pub fn cards(&self) -> Vec<Card<R>> {
        self.items
            .iter()
            .map(|entity| Card::new(self.resource.clone(), entity))
            .collect()
    }
}
