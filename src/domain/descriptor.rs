//! Apex class descriptor (`<Name>.cls-meta.xml`)

/// Platform API version every descriptor declares
pub const API_VERSION: &str = "64.0";

/// Render the descriptor for an active Apex class at `api_version`.
pub fn class_descriptor(api_version: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <ApexClass xmlns=\"http://soap.sforce.com/2006/04/metadata\">\n    \
         <apiVersion>{api_version}</apiVersion>\n    \
         <status>Active</status>\n\
         </ApexClass>\n"
    )
}
