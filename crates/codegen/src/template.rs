//! Component source template

use crate::formatter::Formatter;
use crate::jsx::JsxElement;

/// Renders a typed React function component around a JSX tree
#[derive(Debug, Default)]
pub struct ComponentTemplate {
    formatter: Formatter,
}

impl ComponentTemplate {
    /// Render the full source file of `component_name`
    #[must_use]
    pub fn render(&self, component_name: &str, jsx: &JsxElement) -> String {
        let body = self.formatter.format(jsx, 1);
        format!(
            "import * as React from 'react';\n\
             import type {{ SVGProps }} from 'react';\n\
             \n\
             const {component_name} = (props: SVGProps<SVGSVGElement>) => (\n\
             {body});\n\
             \n\
             export default {component_name};\n"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jsx::JsxAttr;

    #[test]
    fn test_render() {
        let mut svg = JsxElement::new("svg");
        svg.attrs = vec![JsxAttr::Spread("props".into())];

        let source = ComponentTemplate::default().render("OuiIconLeft", &svg);
        assert_eq!(
            source,
            "import * as React from 'react';\n\
             import type { SVGProps } from 'react';\n\
             \n\
             const OuiIconLeft = (props: SVGProps<SVGSVGElement>) => (\n  <svg {...props} />\n);\n\
             \n\
             export default OuiIconLeft;\n"
        );
    }
}
