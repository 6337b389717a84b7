// src/banner/allowlist.rs

// This module provides the constant list of documentation site paths on
// which the promotional banner is eligible to render. Membership is exact
// string equality; trailing slashes and casing are significant.
pub const ALLOWED_BANNER_PATHS: &[&str] = &[
    "/",
    "/angular/",
    "/javascript/",
    "/nextjs/",
    "/react/",
    "/vue/",
    "/react-native/",
    "/javascript/how-amplify-works/",
    "/angular/how-amplify-works/",
    "/react/how-amplify-works/",
    "/nextjs/how-amplify-works/",
    "/vue/how-amplify-works/",
    "/javascript/how-amplify-works/capabilities/",
    "/angular/how-amplify-works/capabilities/",
    "/react/how-amplify-works/capabilities/",
    "/nextjs/how-amplify-works/capabilities/",
    "/vue/how-amplify-works/capabilities/",
    "/javascript/how-amplify-works/building-an-app/",
    "/angular/how-amplify-works/building-an-app/",
    "/react/how-amplify-works/building-an-app/",
    "/nextjs/how-amplify-works/building-an-app/",
    "/vue/how-amplify-works/building-an-app/",
    "/javascript/how-amplify-works/frontend-hosting/",
    "/angular/how-amplify-works/frontend-hosting/",
    "/react/how-amplify-works/frontend-hosting/",
    "/nextjs/how-amplify-works/frontend-hosting/",
    "/vue/how-amplify-works/frontend-hosting/",
    "/javascript/how-amplify-works/connect-to-aws/",
    "/angular/how-amplify-works/connect-to-aws/",
    "/react/how-amplify-works/connect-to-aws/",
    "/nextjs/how-amplify-works/connect-to-aws/",
    "/vue/how-amplify-works/connect-to-aws/",
    "/javascript/how-amplify-works/support-matrix/",
    "/angular/how-amplify-works/support-matrix/",
    "/react/how-amplify-works/support-matrix/",
    "/nextjs/how-amplify-works/support-matrix/",
    "/vue/how-amplify-works/support-matrix/",
    "/javascript/how-amplify-works/amplify-architecture/",
    "/angular/how-amplify-works/amplify-architecture/",
    "/react/how-amplify-works/amplify-architecture/",
    "/nextjs/how-amplify-works/amplify-architecture/",
    "/vue/how-amplify-works/amplify-architecture/",
    "/angular/start/",
    "/javascript/start/",
    "/nextjs/start/",
    "/react/start/",
    "/vue/start/",
    "/react-native/start/",
    "/javascript/build-a-backend/",
    "/angular/build-a-backend/",
    "/nextjs/build-a-backend/",
    "/react/build-a-backend/",
    "/vue/build-a-backend/",
    "/react-native/build-a-backend/",
    "/javascript/build-a-backend/graphqlapi/",
    "/angular/build-a-backend/graphqlapi/",
    "/react/build-a-backend/graphqlapi/",
    "/nextjs/build-a-backend/graphqlapi/",
    "/vue/build-a-backend/graphqlapi/",
    "/javascript/build-a-backend/graphqlapi/connect-to-api/",
    "/react/build-a-backend/graphqlapi/connect-to-api/",
    "/angular/build-a-backend/graphqlapi/connect-to-api/",
    "/vue/build-a-backend/graphqlapi/connect-to-api/",
    "/nextjs/build-a-backend/graphqlapi/connect-to-api/",
    "/javascript/build-a-backend/graphqlapi/connect-existing-data/",
    "/react/build-a-backend/graphqlapi/connect-existing-data/",
    "/angular/build-a-backend/graphqlapi/connect-existing-data/",
    "/vue/build-a-backend/graphqlapi/connect-existing-data/",
    "/nextjs/build-a-backend/graphqlapi/connect-existing-data/",
    "/javascript/build-a-backend/graphqlapi/mutate-data/",
    "/react/build-a-backend/graphqlapi/mutate-data/",
    "/angular/build-a-backend/graphqlapi/mutate-data/",
    "/vue/build-a-backend/graphqlapi/mutate-data/",
    "/nextjs/build-a-backend/graphqlapi/mutate-data/",
    "/javascript/build-a-backend/graphqlapi/query-data/",
    "/react/build-a-backend/graphqlapi/query-data/",
    "/angular/build-a-backend/graphqlapi/query-data/",
    "/vue/build-a-backend/graphqlapi/query-data/",
    "/nextjs/build-a-backend/graphqlapi/query-data/",
    "/javascript/build-a-backend/graphqlapi/subscribe-data/",
    "/react/build-a-backend/graphqlapi/subscribe-data/",
    "/angular/build-a-backend/graphqlapi/subscribe-data/",
    "/vue/build-a-backend/graphqlapi/subscribe-data/",
    "/nextjs/build-a-backend/graphqlapi/subscribe-data/",
    "/javascript/tools/cli/graphqlapi/data-modeling/",
    "/angular/tools/cli/graphqlapi/data-modeling/",
    "/react/tools/cli/graphqlapi/data-modeling/",
    "/nextjs/tools/cli/graphqlapi/data-modeling/",
    "/vue/tools/cli/graphqlapi/data-modeling/",
    "/javascript/build-a-backend/graphqlapi/customize-authorization-rules/",
    "/react/build-a-backend/graphqlapi/customize-authorization-rules/",
    "/angular/build-a-backend/graphqlapi/customize-authorization-rules/",
    "/vue/build-a-backend/graphqlapi/customize-authorization-rules/",
    "/nextjs/build-a-backend/graphqlapi/customize-authorization-rules/",
    "/javascript/tools/cli/graphqlapi/custom-business-logic/",
    "/angular/tools/cli/graphqlapi/custom-business-logic/",
    "/react/tools/cli/graphqlapi/custom-business-logic/",
    "/nextjs/tools/cli/graphqlapi/custom-business-logic/",
    "/vue/tools/cli/graphqlapi/custom-business-logic/",
    "/javascript/tools/cli/graphqlapi/override-appsync/",
    "/angular/tools/cli/graphqlapi/override-appsync/",
    "/react/tools/cli/graphqlapi/override-appsync/",
    "/nextjs/tools/cli/graphqlapi/override-appsync/",
    "/vue/tools/cli/graphqlapi/override-appsync/",
    "/javascript/build-a-backend/graphqlapi/offline/",
    "/react/build-a-backend/graphqlapi/offline/",
    "/angular/build-a-backend/graphqlapi/offline/",
    "/vue/build-a-backend/graphqlapi/offline/",
    "/nextjs/build-a-backend/graphqlapi/offline/",
    "/javascript/build-a-backend/graphqlapi/best-practice/",
    "/react/build-a-backend/graphqlapi/best-practice/",
    "/angular/build-a-backend/graphqlapi/best-practice/",
    "/vue/build-a-backend/graphqlapi/best-practice/",
    "/nextjs/build-a-backend/graphqlapi/best-practice/",
    "/javascript/build-a-backend/graphqlapi/best-practice/deltasync/",
    "/angular/build-a-backend/graphqlapi/best-practice/deltasync/",
    "/react/build-a-backend/graphqlapi/best-practice/deltasync/",
    "/nextjs/build-a-backend/graphqlapi/best-practice/deltasync/",
    "/vue/build-a-backend/graphqlapi/best-practice/deltasync/",
    "/javascript/build-a-backend/graphqlapi/best-practice/create-blog/",
    "/angular/build-a-backend/graphqlapi/best-practice/create-blog/",
    "/react/build-a-backend/graphqlapi/best-practice/create-blog/",
    "/nextjs/build-a-backend/graphqlapi/best-practice/create-blog/",
    "/vue/build-a-backend/graphqlapi/best-practice/create-blog/",
    "/javascript/build-a-backend/graphqlapi/best-practice/warehouse-management/",
    "/angular/build-a-backend/graphqlapi/best-practice/warehouse-management/",
    "/react/build-a-backend/graphqlapi/best-practice/warehouse-management/",
    "/nextjs/build-a-backend/graphqlapi/best-practice/warehouse-management/",
    "/vue/build-a-backend/graphqlapi/best-practice/warehouse-management/",
    "/javascript/tools/cli/graphqlapi/search-and-result-aggregations/",
    "/react/tools/cli/graphqlapi/search-and-result-aggregations/",
    "/angular/tools/cli/graphqlapi/search-and-result-aggregations/",
    "/nextjs/tools/cli/graphqlapi/search-and-result-aggregations/",
    "/vue/tools/cli/graphqlapi/search-and-result-aggregations/",
    "/javascript/tools/cli/graphqlapi/connect-machine-learning-services/",
    "/angular/tools/cli/graphqlapi/connect-machine-learning-services/",
    "/react/tools/cli/graphqlapi/connect-machine-learning-services/",
    "/nextjs/tools/cli/graphqlapi/connect-machine-learning-services/",
    "/vue/tools/cli/graphqlapi/connect-machine-learning-services/",
    "/javascript/build-a-backend/graphqlapi/troubleshooting/",
    "/react/build-a-backend/graphqlapi/troubleshooting/",
    "/angular/build-a-backend/graphqlapi/troubleshooting/",
    "/vue/build-a-backend/graphqlapi/troubleshooting/",
    "/nextjs/build-a-backend/graphqlapi/troubleshooting/",
    "/javascript/tools/cli/graphqlapi/directives-reference/",
    "/angular/tools/cli/graphqlapi/directives-reference/",
    "/react/tools/cli/graphqlapi/directives-reference/",
    "/nextjs/tools/cli/graphqlapi/directives-reference/",
    "/vue/tools/cli/graphqlapi/directives-reference/",
    "/javascript/build-a-backend/auth/",
    "/angular/build-a-backend/auth/",
    "/react/build-a-backend/auth/",
    "/nextjs/build-a-backend/auth/",
    "/vue/build-a-backend/auth/",
    "/javascript/build-a-backend/auth/set-up-auth/",
    "/react/build-a-backend/auth/set-up-auth/",
    "/angular/build-a-backend/auth/set-up-auth/",
    "/vue/build-a-backend/auth/set-up-auth/",
    "/nextjs/build-a-backend/auth/set-up-auth/",
    "/javascript/build-a-backend/auth/enable-sign-up/",
    "/react/build-a-backend/auth/enable-sign-up/",
    "/angular/build-a-backend/auth/enable-sign-up/",
    "/vue/build-a-backend/auth/enable-sign-up/",
    "/nextjs/build-a-backend/auth/enable-sign-up/",
    "/javascript/build-a-backend/auth/manage-user-session/",
    "/react/build-a-backend/auth/manage-user-session/",
    "/angular/build-a-backend/auth/manage-user-session/",
    "/vue/build-a-backend/auth/manage-user-session/",
    "/nextjs/build-a-backend/auth/manage-user-session/",
    "/javascript/build-a-backend/auth/add-social-provider/",
    "/react/build-a-backend/auth/add-social-provider/",
    "/angular/build-a-backend/auth/add-social-provider/",
    "/vue/build-a-backend/auth/add-social-provider/",
    "/nextjs/build-a-backend/auth/add-social-provider/",
    "/javascript/build-a-backend/auth/manage-user-profile/",
    "/react/build-a-backend/auth/manage-user-profile/",
    "/angular/build-a-backend/auth/manage-user-profile/",
    "/vue/build-a-backend/auth/manage-user-profile/",
    "/nextjs/build-a-backend/auth/manage-user-profile/",
    "/javascript/build-a-backend/auth/password-management/",
    "/react/build-a-backend/auth/password-management/",
    "/angular/build-a-backend/auth/password-management/",
    "/vue/build-a-backend/auth/password-management/",
    "/nextjs/build-a-backend/auth/password-management/",
    "/javascript/build-a-backend/auth/manage-mfa/",
    "/react/build-a-backend/auth/manage-mfa/",
    "/angular/build-a-backend/auth/manage-mfa/",
    "/vue/build-a-backend/auth/manage-mfa/",
    "/nextjs/build-a-backend/auth/manage-mfa/",
    "/javascript/build-a-backend/auth/delete-user-account/",
    "/react/build-a-backend/auth/delete-user-account/",
    "/angular/build-a-backend/auth/delete-user-account/",
    "/vue/build-a-backend/auth/delete-user-account/",
    "/nextjs/build-a-backend/auth/delete-user-account/",
    "/javascript/build-a-backend/auth/server-side-rendering/",
    "/react/build-a-backend/auth/server-side-rendering/",
    "/angular/build-a-backend/auth/server-side-rendering/",
    "/vue/build-a-backend/auth/server-side-rendering/",
    "/nextjs/build-a-backend/auth/server-side-rendering/",
    "/javascript/build-a-backend/auth/auth-events/",
    "/react/build-a-backend/auth/auth-events/",
    "/angular/build-a-backend/auth/auth-events/",
    "/vue/build-a-backend/auth/auth-events/",
    "/nextjs/build-a-backend/auth/auth-events/",
    "/javascript/tools/cli/auth/admin-actions/",
    "/angular/tools/cli/auth/admin-actions/",
    "/react/tools/cli/auth/admin-actions/",
    "/nextjs/tools/cli/auth/admin-actions/",
    "/vue/tools/cli/auth/admin-actions/",
    "/javascript/tools/cli/auth/override-cognito/",
    "/angular/tools/cli/auth/override-cognito/",
    "/react/tools/cli/auth/override-cognito/",
    "/nextjs/tools/cli/auth/override-cognito/",
    "/vue/tools/cli/auth/override-cognito/",
    "/react-native/tools/cli/auth/override-cognito/",
    "/react-native/build-a-backend/graphqlapi/",
    "/react-native/tools/cli/graphqlapi/custom-business-logic/",
    "/react-native/tools/cli/graphqlapi/search-and-result-aggregations/",
    "/angular/tools/cli/graphqlapi/search-and-result-aggregations/",
    "/react/tools/cli/graphqlapi/search-and-result-aggregations/",
    "/nextjs/tools/cli/graphqlapi/search-and-result-aggregations/",
    "/vue/tools/cli/graphqlapi/search-and-result-aggregations/",
    "/react-native/tools/cli/graphqlapi/connect-machine-learning-services/",
    "/javascript/prev/start/project-setup/create-application/",
    "/angular/prev/start/project-setup/create-application/",
    "/nextjs/prev/start/project-setup/create-application/",
    "/react/prev/start/project-setup/create-application/",
    "/vue/prev/start/project-setup/create-application/",
    "/javascript/prev/start/project-setup/prerequisites/",
    "/angular/prev/start/project-setup/prerequisites/",
    "/react/prev/start/project-setup/prerequisites/",
    "/nextjs/prev/start/project-setup/prerequisites/",
    "/vue/prev/start/project-setup/prerequisites/",
    "/javascript/start/project-setup/create-application/",
    "/angular/start/project-setup/create-application/",
    "/nextjs/start/project-setup/create-application/",
    "/react/start/project-setup/create-application/",
    "/vue/start/project-setup/create-application/",
    "/javascript/start/project-setup/prerequisites/",
    "/angular/start/project-setup/prerequisites/",
    "/nextjs/start/project-setup/prerequisites/",
    "/react/start/project-setup/prerequisites/",
    "/vue/start/project-setup/prerequisites/",
    "/angular/start/getting-started/auth/",
    "/react/start/getting-started/auth/",
    "/vue/start/getting-started/auth/",
    "/angular/start/getting-started/data-model/",
    "/javascript/start/getting-started/data-model/",
    "/nextjs/start/getting-started/data-model/",
    "/react/start/getting-started/data-model/",
    "/vue/start/getting-started/data-model/",
    "/angular/start/getting-started/hosting/",
    "/javascript/start/getting-started/hosting/",
    "/nextjs/start/getting-started/hosting/",
    "/react/start/getting-started/hosting/",
    "/vue/start/getting-started/hosting/",
    "/angular/start/getting-started/installation/",
    "/javascript/start/getting-started/installation/",
    "/nextjs/start/getting-started/installation/",
    "/react/start/getting-started/installation/",
    "/vue/start/getting-started/installation/",
    "/angular/start/getting-started/nextsteps/",
    "/javascript/start/getting-started/nextsteps/",
    "/nextjs/start/getting-started/nextsteps/",
    "/react/start/getting-started/nextsteps/",
    "/vue/start/getting-started/nextsteps/",
    "/angular/start/getting-started/setup/",
    "/javascript/start/getting-started/setup/",
    "/nextjs/start/getting-started/setup/",
    "/react/start/getting-started/setup/",
    "/vue/start/getting-started/setup/",
    "/angular/start/getting-started/introduction/",
    "/javascript/start/getting-started/introduction/",
    "/nextjs/start/getting-started/introduction/",
    "/react/start/getting-started/introduction/",
    "/vue/start/getting-started/introduction/",
    "/react-native/start/getting-started/auth/",
    "/react-native/start/getting-started/data-model/",
    "/react-native/start/getting-started/installation/",
    "/react-native/start/getting-started/nextsteps/",
    "/react-native/start/getting-started/setup/",
    "/react-native/start/getting-started/introduction/",
    "/android/build-ui/",
    "/angular/build-ui/",
    "/flutter/build-ui/",
    "/react/build-ui/",
    "/react-native/build-ui/",
    "/swift/build-ui/",
    "/vue/build-ui/",
    "/javascript/deploy-and-host/",
    "/angular/deploy-and-host/",
    "/react/deploy-and-host/",
    "/nextjs/deploy-and-host/",
    "/vue/deploy-and-host/",
    "/javascript/prev/tools/libraries/",
    "/angular/prev/tools/libraries/",
    "/nextjs/prev/tools/libraries/",
    "/react/prev/tools/libraries/",
    "/vue/prev/tools/libraries/",
    "/javascript/tools/libraries/",
    "/angular/tools/libraries/",
    "/react/tools/libraries/",
    "/nextjs/tools/libraries/",
    "/vue/tools/libraries/",
];
