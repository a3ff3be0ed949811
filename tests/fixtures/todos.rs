// Sample resources used by the source discovery and CLI tests.

use web::{Request, ResponseWriter, RoutingContext};

pub struct TodosResource {
    items: Vec<String>,
}

impl TodosResource {
    pub fn before_all(&self, c: RoutingContext, w: &mut ResponseWriter, r: &Request) -> bool {
        true
    }

    pub fn before_one(&self, w: &mut ResponseWriter, r: &Request) -> bool {
        true
    }

    pub fn get_many(&self, c: RoutingContext, w: &mut ResponseWriter, r: &Request) {}

    pub fn get_one(&self, w: &mut ResponseWriter, r: &Request) {}

    pub fn post(&self, w: &mut ResponseWriter, r: &Request) {}

    pub fn delete_one(&mut self, w: &mut ResponseWriter, r: &Request) {}

    fn len(&self) -> usize {
        self.items.len()
    }
}

pub struct UsersResource;

impl UsersResource {
    // Missing the request parameter
    pub fn put(&self, w: &mut ResponseWriter) {}

    // Hooks must return bool
    pub fn before_many(&self, w: &mut ResponseWriter, r: &Request) {}

    pub fn get_many(&self, w: &mut ResponseWriter, r: &Request) {}
}

pub struct HealthResource;
