//! Bundled hints for Spring Boot's reactive web auto-configuration.

use crate::{access::AccessBits, hint::Declaration};

const REACTIVE: &str = "org.springframework.boot.autoconfigure.web.reactive";

/// Hints for `WebFluxAutoConfiguration` and the reactive web server factory.
///
/// Nested classes are written in binary form (`Outer$Inner`), the form
/// native-image resolves reflect-config names by.
pub fn reactive_web() -> Vec<Declaration> {
    vec![
        Declaration::new(
            format!("{REACTIVE}.WebFluxAutoConfiguration"),
            AccessBits::CLASS | AccessBits::PUBLIC_CONSTRUCTORS,
        )
        // Reached through WebFluxConfigurationSupport and CodecConfigurer.properties.
        .with_types([
            "org.springframework.http.codec.support.DefaultClientCodecConfigurer",
            "org.springframework.http.codec.support.DefaultServerCodecConfigurer",
            "org.springframework.http.codec.ClientCodecConfigurer",
            "org.springframework.http.codec.ServerCodecConfigurer",
            "org.springframework.web.reactive.HandlerResult",
        ])
        // Probed by the default codecs; only present with optional dependencies.
        .with_type_names([
            "com.sun.xml.internal.stream.XMLInputFactoryImpl",
            "com.fasterxml.jackson.databind.ObjectMapper",
            "com.fasterxml.jackson.core.JsonGenerator",
            "com.fasterxml.jackson.dataformat.smile.SmileFactory",
            "javax.xml.bind.Binder",
            "org.springframework.web.reactive.result.method.AbstractHandlerMethodMapping$PreFlightAmbiguousMatchHandler",
            "com.google.protobuf.Message",
            "org.synchronoss.cloud.nio.multipart.NioMultipartParser",
        ]),
        Declaration::new(
            format!("{REACTIVE}.ReactiveWebServerFactoryAutoConfiguration$BeanPostProcessorsRegistrar"),
            AccessBits::CLASS | AccessBits::PUBLIC_CONSTRUCTORS,
        )
        .with_types(["org.springframework.boot.web.server.WebServerFactoryCustomizerBeanPostProcessor"]),
        Declaration::new(
            format!("{REACTIVE}.ReactiveWebServerFactoryAutoConfiguration"),
            AccessBits::CLASS | AccessBits::PUBLIC_CONSTRUCTORS | AccessBits::PUBLIC_METHODS,
        )
        .with_types([
            "org.springframework.boot.web.reactive.context.AnnotationConfigReactiveWebServerApplicationContext",
        ]),
    ]
}
