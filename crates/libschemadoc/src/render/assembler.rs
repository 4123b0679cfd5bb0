use crate::descriptor::ArgumentDescriptor;
use crate::descriptor::FieldDescriptor;
use crate::descriptor::QueryDescriptor;
use crate::descriptor::TypeDescriptor;
use crate::index::Category;
use crate::index::SchemaIndex;
use crate::link::link_signature;
use crate::render::GROUP_ORDER;
use crate::render::NavigationSidebar;
use crate::render::assets;
use std::collections::BTreeMap;

/// Assembles the full document artifact from an immutable descriptor set.
///
/// Assembly is a pure function of its inputs: group order is fixed by
/// [`GROUP_ORDER`], members iterate in `BTreeMap` name order, and every
/// block is anchored under `<category>-<name>`, so rendering the same
/// descriptor set twice produces byte-identical output.
pub struct DocumentAssembler<'a> {
    index: SchemaIndex,
    queries: &'a BTreeMap<String, QueryDescriptor>,
    types: &'a BTreeMap<String, TypeDescriptor>,
}
impl<'a> DocumentAssembler<'a> {
    pub fn new(
        queries: &'a BTreeMap<String, QueryDescriptor>,
        types: &'a BTreeMap<String, TypeDescriptor>,
    ) -> Self {
        DocumentAssembler {
            index: SchemaIndex::new(types),
            queries,
            types,
        }
    }

    pub fn index(&self) -> &SchemaIndex {
        &self.index
    }

    /// Renders the complete self-contained document: markup, embedded
    /// styling, and embedded scripting.
    pub fn assemble(&self) -> String {
        let sidebar = NavigationSidebar::new(self.queries, self.types);
        format!(
            "<!DOCTYPE html><html><head><meta charset='utf-8'>\
            <title>GraphQL Docs</title>{style}</head>\
            <body>{sidebar}{content}{script}</body></html>",
            style = assets::STYLE,
            sidebar = sidebar.to_html(),
            content = self.content(),
            script = assets::SCRIPT,
        )
    }

    fn content(&self) -> String {
        let mut lines = vec!["<div id='content'>".to_string()];
        for &(label, category) in GROUP_ORDER.iter() {
            lines.push(format!("<h1 id='{category}'>{label}</h1>"));
            if category == Category::Query {
                for query in self.queries.values() {
                    lines.push(self.query_block(query));
                }
            } else {
                let members = self.types.values()
                    .filter(|descriptor| descriptor.category() == category);
                for descriptor in members {
                    lines.push(self.type_block(descriptor));
                }
            }
        }
        lines.push("</div>".to_string());
        lines.join("\n")
    }

    fn query_block(&self, query: &QueryDescriptor) -> String {
        let mut lines = vec![format!(
            "<h2 id='{anchor}'>{name}</h2>",
            anchor = Category::Query.anchor(&query.name),
            name = query.name,
        )];
        if let Some(description) = query.description.as_deref()
            && !description.is_empty() {
            lines.push(format!("<p>{description}</p>"));
        }

        lines.push("<h3>Arguments</h3>".to_string());
        lines.push(self.args_table(&query.args));
        lines.push("<h3>Response</h3>".to_string());
        lines.push(format!(
            "<p>{}</p>",
            link_signature(&query.return_type_signature, &self.index),
        ));
        lines.join("\n")
    }

    fn type_block(&self, descriptor: &TypeDescriptor) -> String {
        let anchor = descriptor.category().anchor(descriptor.name());
        let mut lines = vec![format!(
            "<h2 id='{anchor}'>{name}</h2>",
            name = descriptor.name(),
        )];
        if let Some(description) = descriptor.description()
            && !description.is_empty() {
            lines.push(format!("<p>{description}</p>"));
        }

        match descriptor {
            TypeDescriptor::Enum(enum_type) => {
                if !enum_type.values.is_empty() {
                    lines.push(
                        "<h3>Values</h3>\
                        <table><tr><th>Name</th><th>Description</th></tr>"
                            .to_string(),
                    );
                    for value in &enum_type.values {
                        lines.push(format!(
                            "<tr><td>{name}</td><td>{description}</td></tr>",
                            name = value.name,
                            description =
                                value.description.as_deref().unwrap_or(""),
                        ));
                    }
                    lines.push("</table>".to_string());
                }
            },

            TypeDescriptor::InputObject(input_object) => {
                if !input_object.input_fields.is_empty() {
                    lines.push(
                        "<h3>Input Fields</h3>\
                        <table><tr><th>Name</th><th>Type</th>\
                        <th>Description</th><th>Default</th></tr>"
                            .to_string(),
                    );
                    for input_field in &input_object.input_fields {
                        lines.push(format!(
                            "<tr><td>{name}</td>\
                            <td>{type_cell}</td>\
                            <td>{description}</td>\
                            <td>{default}</td></tr>",
                            name = input_field.name,
                            type_cell = link_signature(
                                &input_field.type_signature,
                                &self.index,
                            ),
                            description =
                                input_field.description.as_deref().unwrap_or(""),
                            default =
                                input_field.default_value.as_deref().unwrap_or(""),
                        ));
                    }
                    lines.push("</table>".to_string());
                }
            },

            TypeDescriptor::Interface(interface_type) => {
                if !interface_type.fields.is_empty() {
                    lines.push(self.fields_block(&anchor, &interface_type.fields));
                }
            },

            TypeDescriptor::Object(object_type) => {
                if !object_type.fields.is_empty() {
                    lines.push(self.fields_block(&anchor, &object_type.fields));
                }
            },

            TypeDescriptor::Scalar(_) => {
                lines.push(
                    "<p>Scalar type, usually built-in \
                    (String, Int, Boolean, etc.)</p>"
                        .to_string(),
                );
            },

            TypeDescriptor::Union(union_type) => {
                if !union_type.possible_types.is_empty() {
                    lines.push("<h3>Possible Types</h3><ul>".to_string());
                    for member_name in &union_type.possible_types {
                        lines.push(format!(
                            "<li>{}</li>",
                            link_signature(member_name, &self.index),
                        ));
                    }
                    lines.push("</ul>".to_string());
                }
            },
        }

        lines.join("\n")
    }

    /// Field table followed by one `-args` subsection per field that
    /// declares arguments, in field-declaration order.
    fn fields_block(&self, anchor: &str, fields: &[FieldDescriptor]) -> String {
        let mut lines = vec![
            "<h3>Fields</h3>\
            <table><tr><th>Name</th><th>Type</th><th>Description</th></tr>"
                .to_string(),
        ];
        for field in fields {
            let name_cell = if field.has_args() {
                format!(
                    "<a href='#{anchor}-{name}-args'>{name}</a>",
                    name = field.name,
                )
            } else {
                field.name.clone()
            };
            lines.push(format!(
                "<tr><td>{name_cell}</td><td>{type_cell}</td><td>{description}</td></tr>",
                type_cell = link_signature(&field.type_signature, &self.index),
                description = field.description.as_deref().unwrap_or(""),
            ));
        }
        lines.push("</table>".to_string());

        let mut emitted_args_header = false;
        for field in fields {
            if !field.has_args() {
                continue;
            }
            if !emitted_args_header {
                lines.push("<h3>Arguments</h3>".to_string());
                emitted_args_header = true;
            }
            lines.push(format!(
                "<h4 id='{anchor}-{name}-args'>{name}</h4>",
                name = field.name,
            ));
            lines.push(self.args_table(&field.args));
        }

        lines.push("<hr/>".to_string());
        lines.join("\n")
    }

    fn args_table(&self, args: &[ArgumentDescriptor]) -> String {
        if args.is_empty() {
            return "<p>No arguments</p>".to_string();
        }

        let mut lines = vec![
            "<table><tr><th>Name</th><th>Type</th>\
            <th>Description</th><th>Default</th></tr>"
                .to_string(),
        ];
        for arg in args {
            lines.push(format!(
                "<tr><td>{name}</td>\
                <td>{type_cell}</td>\
                <td>{description}</td>\
                <td>{default}</td></tr>",
                name = arg.name,
                type_cell = link_signature(&arg.type_signature, &self.index),
                description = arg.description.as_deref().unwrap_or(""),
                default = arg.default_value.as_deref().unwrap_or(""),
            ));
        }
        lines.push("</table>".to_string());
        lines.join("\n")
    }
}
