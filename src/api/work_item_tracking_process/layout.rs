//
//  azure-devops-rest
//  api/work_item_tracking_process/layout.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Work item form layout: pages hold sections, sections hold groups and
//! groups hold controls.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::common::vss_enum;

vss_enum! {
    pub enum PageType {
        Custom = 1 => "custom",
        History = 2 => "history",
        Links = 3 => "links",
        Attachments = 4 => "attachments",
    }
}

/// A contributed (extension) page, group or control.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WitContribution {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contribution_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub inputs: HashMap<String, Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_on_deleted_work_item: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Control {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// `FieldControl`, `HtmlFieldControl`, `DateTimeControl`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inherited: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub overridden: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_contribution: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contribution: Option<WitContribution>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub watermark: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inherited: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub overridden: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_contribution: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contribution: Option<WitContribution>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub controls: Vec<Control>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub overridden: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<Group>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_type: Option<PageType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inherited: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub overridden: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_contribution: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contribution: Option<WitContribution>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FormLayout {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<Page>,

    /// Controls outside any page, such as the title and state fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub system_controls: Vec<Control>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<Extension>,
}

impl FormLayout {
    /// Every control placed on the form's pages, in page order.
    pub fn controls(&self) -> impl Iterator<Item = &Control> {
        self.pages
            .iter()
            .flat_map(|page| &page.sections)
            .flat_map(|section| &section.groups)
            .flat_map(|group| &group.controls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_walks_controls() {
        let layout: FormLayout = serde_json::from_str(
            r#"{
                "pages": [{
                    "id": "Details",
                    "pageType": "custom",
                    "sections": [{
                        "id": "Section1",
                        "groups": [{
                            "label": "Planning",
                            "controls": [
                                {"id": "Microsoft.VSTS.Common.Priority", "controlType": "FieldControl"},
                                {"id": "Microsoft.VSTS.Scheduling.StoryPoints"}
                            ]
                        }]
                    }]
                }, {
                    "id": "History",
                    "pageType": 2
                }],
                "systemControls": [{"id": "System.Title"}]
            }"#,
        )
        .unwrap();

        let ids: Vec<_> = layout.controls().filter_map(|c| c.id.as_deref()).collect();

        assert_eq!(
            ids,
            vec!["Microsoft.VSTS.Common.Priority", "Microsoft.VSTS.Scheduling.StoryPoints"]
        );
        assert_eq!(layout.pages[1].page_type, Some(PageType::History));
        assert_eq!(layout.system_controls.len(), 1);
    }
}
